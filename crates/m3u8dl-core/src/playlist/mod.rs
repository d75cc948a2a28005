//! HLS playlist handling: pick the best variant from a master manifest and
//! rewrite the chosen variant's segment URLs to absolute form.

mod base_path;
mod rewrite;
mod variant;

pub use base_path::{derive_base_path, has_scheme};
pub use rewrite::{rewrite_segments, Rewritten};
pub use variant::{select_best_variant, Resolution, Variant};

/// Master-playlist tag announcing a variant stream; the next line is its URI.
pub const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF";

/// Media-playlist tag announcing a segment duration; the next URI line is the segment.
pub const EXTINF_TAG: &str = "#EXTINF";
