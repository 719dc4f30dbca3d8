//! Thin parse/format seam over chrono's strftime machinery.
//!
//! Keeps the formatting backend out of `date.rs`: the date type hands a
//! pattern to this module and never touches chrono's format API itself.

use chrono::NaiveDate;

use crate::error::DateError;

/// Parses `text` as a calendar date according to `pattern`.
///
/// Patterns that include time-of-day tokens must still be matched by the
/// input, but only the date fields survive into the result.
///
/// # Errors
///
/// Returns [`DateError::Parse`] carrying the input, the pattern, and the
/// underlying chrono failure when `text` does not match `pattern` (or the
/// pattern itself is malformed).
pub(crate) fn parse_date(text: &str, pattern: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(text, pattern).map_err(|source| DateError::Parse {
        input: text.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}

/// Formats `date` according to `pattern`.
///
/// Only called with the crate's own locale patterns, which are statically
/// known to be valid strftime.
pub(crate) fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}
