//! Segment URI rewriting for a variant (media) playlist.

use super::{has_scheme, EXTINF_TAG};

/// Rewritten playlist text plus counts for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    /// Segment URIs that had `base` prepended.
    pub rewritten: usize,
    /// Segment URIs that were already absolute.
    pub absolute: usize,
}

/// Makes every segment URI in `playlist` absolute.
///
/// After each `#EXTINF` line, the next line that is neither a tag nor blank
/// is the segment URI; if it has no scheme it becomes `<base>/<uri>`. Every
/// other line is copied as is. Output always uses `\n` line endings.
pub fn rewrite_segments(playlist: &str, base: &str) -> Rewritten {
    let base = base.trim_end_matches('/');
    let mut out = Rewritten {
        text: String::with_capacity(playlist.len() + base.len() * 8),
        rewritten: 0,
        absolute: 0,
    };
    let mut awaiting_uri = false;

    for line in playlist.lines() {
        if line.starts_with(EXTINF_TAG) {
            awaiting_uri = true;
            push_line(&mut out.text, line);
            continue;
        }
        let trimmed = line.trim();
        if !awaiting_uri || trimmed.is_empty() || trimmed.starts_with('#') {
            push_line(&mut out.text, line);
            continue;
        }

        awaiting_uri = false;
        if has_scheme(trimmed) {
            out.absolute += 1;
            push_line(&mut out.text, trimmed);
        } else {
            out.rewritten += 1;
            out.text.push_str(base);
            out.text.push('/');
            push_line(&mut out.text, trimmed);
        }
    }

    out
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}
