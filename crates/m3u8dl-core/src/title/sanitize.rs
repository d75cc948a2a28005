//! Title sanitization.

/// Replaces every run of characters other than ASCII letters, digits and `_`
/// with a single `_`.
pub fn sanitize_title(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    out
}
