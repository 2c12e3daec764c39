//! Scheme prefix handling.

use crate::constants::SCHEME_PREFIXES;

/// Strips leading `http://` and `https://` prefixes from `input`.
///
/// Matching is case-sensitive. Prefixes are removed repeatedly, so
/// `http://https://x` reduces to `x`. Any other scheme is left in place for
/// the scanner to reject.
///
/// # Examples
///
/// ```
/// use model_path::strip_scheme;
///
/// assert_eq!(strip_scheme("https://example.com/x/mistral"), "example.com/x/mistral");
/// assert_eq!(strip_scheme("file:///etc/passwd"), "file:///etc/passwd");
/// assert_eq!(strip_scheme("HTTP://mistral"), "HTTP://mistral");
/// ```
#[must_use]
pub fn strip_scheme(input: &str) -> &str {
    let mut rest = input;
    while let Some(stripped) = SCHEME_PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
    {
        rest = stripped;
    }
    rest
}
