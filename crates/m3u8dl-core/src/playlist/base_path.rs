//! Base path derivation for relative segment URIs.

/// Returns true if `s` starts with `scheme://` (RFC 3986 scheme characters).
pub fn has_scheme(s: &str) -> bool {
    let Some((scheme, _)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Derives the absolute directory URL under which a variant's segments live.
///
/// Takes the directory part of `candidate` (query and fragment dropped, runs
/// of `/` collapsed) and repairs the scheme separator the collapse damages:
/// `https:/host` and `https:host` become `https://host`, likewise for
/// `http`. Anything else, including a scheme-relative `//host/...`, gets
/// `https://`.
///
/// - `https://cdn.example.com/a/b/index.m3u8` → `https://cdn.example.com/a/b`
/// - `//cdn.example.com/a/index.m3u8` → `https://cdn.example.com/a`
pub fn derive_base_path(candidate: &str) -> String {
    let without_query = candidate
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let dir = match without_query.rfind('/') {
        Some(idx) => &without_query[..idx],
        None => "",
    };
    let dir = collapse_slashes(dir);

    if let Some(rest) = dir.strip_prefix("https:") {
        format!("https://{}", rest.trim_start_matches('/'))
    } else if let Some(rest) = dir.strip_prefix("http:") {
        format!("http://{}", rest.trim_start_matches('/'))
    } else {
        format!("https://{}", dir.trim_start_matches('/'))
    }
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}
