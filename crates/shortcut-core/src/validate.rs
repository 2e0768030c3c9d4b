//! Shallow URL validation for shorten requests.

const SCHEME_PREFIX: &str = "https://";

/// Decides whether a submitted string qualifies as a shortenable URL.
///
/// The check is deliberately shallow: the input must start with the
/// literal `https://` prefix, contain no whitespace, have content after
/// the prefix, and that content must contain at least one `.`. No DNS
/// lookup, no TLD list, no percent-encoding handling.
pub fn is_valid(url: &str) -> bool {
    let Some(rest) = url.strip_prefix(SCHEME_PREFIX) else {
        return false;
    };

    if rest.is_empty() || url.chars().any(char::is_whitespace) {
        return false;
    }

    rest.contains('.')
}
