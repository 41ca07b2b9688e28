//! Card number suffix extraction.

use regex::Captures;

use super::group;

/// The four captured digits, as written. Masking (`XXXX`, `****`) is
/// matched by the pattern and never part of the value.
pub fn format_last_4_digits(caps: &Captures<'_>) -> Option<String> {
    group(caps, 1)
}
