//! Error types for the datevalue crate.

/// Error type for all fallible operations in the datevalue crate.
///
/// Parsing a date string is the only fallible runtime operation; locale tag
/// lookup can additionally reject a tag it does not know. Field arithmetic
/// never fails: out-of-range day/month values normalize by calendar rollover
/// instead of being rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Returned when a date string does not match the expected pattern.
    #[error("cannot parse {input:?} as a date with pattern {pattern:?}")]
    Parse {
        /// The input text that failed to parse.
        input: String,
        /// The strftime pattern the text was parsed against.
        pattern: String,
        /// The underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// Returned when a locale tag does not name a supported locale.
    #[error("unknown locale tag {tag:?} (supported: en-US, en-GB, de-DE, fr-FR, sv-SE, ja-JP)")]
    UnknownLocale {
        /// The tag that was not recognized.
        tag: String,
    },
}
