//! Variant selection from a master playlist.

use super::STREAM_INF_TAG;
use std::fmt;

const RESOLUTION_ATTR: &str = "RESOLUTION=";

/// Pixel dimensions advertised by a `RESOLUTION=WxH` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Pixel count; widened so that large dimensions cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Finds the first well-formed `RESOLUTION=<digits>x<digits>` in a tag line.
    pub fn from_tag_line(line: &str) -> Option<Self> {
        line.match_indices(RESOLUTION_ATTR)
            .find_map(|(idx, _)| parse_dimensions(&line[idx + RESOLUTION_ATTR.len()..]))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses leading `<digits>x<digits>`; trailing text (`,CODECS=...`) is ignored.
fn parse_dimensions(s: &str) -> Option<Resolution> {
    let (width, rest) = split_digits(s)?;
    let rest = rest.strip_prefix('x')?;
    let (height, _) = split_digits(rest)?;
    Some(Resolution {
        width: width.parse().ok()?,
        height: height.parse().ok()?,
    })
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}

/// The chosen variant stream: its resolution and the URI line that followed its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub resolution: Resolution,
    pub uri: String,
}

/// Returns the variant with the largest resolution area.
///
/// Only `#EXT-X-STREAM-INF` lines carrying a parsable `RESOLUTION` are
/// considered. A strictly larger area replaces the current best, so ties keep
/// the first one seen. The line right after a new best tag is taken as its URI
/// and consumed. Returns `None` when no tag qualifies or the best one has an
/// empty URI.
pub fn select_best_variant(manifest: &str) -> Option<Variant> {
    let mut best: Option<Variant> = None;
    let mut max_area: u64 = 0;
    let mut lines = manifest.lines();

    while let Some(line) = lines.next() {
        if !line.starts_with(STREAM_INF_TAG) {
            continue;
        }
        let Some(resolution) = Resolution::from_tag_line(line) else {
            tracing::debug!("variant tag without resolution: {}", line);
            continue;
        };
        if resolution.area() > max_area {
            max_area = resolution.area();
            let uri = lines.next().map(str::trim).unwrap_or_default();
            best = Some(Variant {
                resolution,
                uri: uri.to_string(),
            });
        }
    }

    best.filter(|v| !v.uri.is_empty())
}
