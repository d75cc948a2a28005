//! Title hint extraction from the manifest URL path.

/// Returns the last path segment of `url` with its extension removed.
///
/// Falls back to plain string splitting when `url` does not parse (e.g. it has
/// no scheme). Returns `None` if nothing usable remains.
pub fn stem_from_url_path(url: &str) -> Option<String> {
    let segment = match url::Url::parse(url) {
        Ok(parsed) => last_segment(parsed.path())?.to_string(),
        Err(_) => {
            let path = url.split(|c: char| c == '?' || c == '#').next()?;
            last_segment(path)?.to_string()
        }
    };
    let stem = match segment.rfind('.') {
        Some(idx) => &segment[..idx],
        None => segment.as_str(),
    };
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

fn last_segment(path: &str) -> Option<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .last()
}
