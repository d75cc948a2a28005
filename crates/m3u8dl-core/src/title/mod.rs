//! Output title derivation.
//!
//! The title names both the temporary playlist and the final `<title>.mp4`.
//! It comes from `--filename` or, failing that, the manifest URL's last path
//! segment without its extension, and is always sanitized.

mod path;
mod sanitize;

pub use path::stem_from_url_path;
pub use sanitize::sanitize_title;

/// Title used when neither the caller nor the URL yields anything usable.
const DEFAULT_TITLE: &str = "video";

/// Derives the sanitized output title for a run.
///
/// # Examples
///
/// - `derive_title("https://example.com/show/episode-1.m3u8", None)` → `"episode_1"`
/// - `derive_title("https://example.com/x.m3u8", Some("My Video!"))` → `"My_Video_"`
pub fn derive_title(manifest_url: &str, requested: Option<&str>) -> String {
    let raw = requested
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| stem_from_url_path(manifest_url));

    let Some(raw) = raw else {
        return DEFAULT_TITLE.to_string();
    };

    let sanitized = sanitize_title(&raw);
    if sanitized.is_empty() || sanitized == "_" {
        DEFAULT_TITLE.to_string()
    } else {
        sanitized
    }
}
