//! Slugs for code identifiers

/// Turn a code name into an identifier-safe slug.
///
/// ASCII letters and digits are kept (lowercased), runs of whitespace, `-` and
/// `_` collapse into a single `-`, and everything else (quotes, asterisks,
/// non-ASCII punctuation) is dropped.
///
/// # Examples
///
/// ```
/// use handfive_domain::slug;
///
/// assert_eq!(slug("partial colexification"), "partial-colexification");
/// assert_eq!(slug("“hand” word other than *qalima"), "hand-word-other-than-qalima");
/// ```
pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_separator = false;

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }

    out
}
