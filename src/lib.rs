//! # datevalue
//!
//! Fluent calendar date values for test fixtures.
//!
//! ## Quick Start
//!
//! ```ignore
//! use datevalue::{DateLocale, DateValue};
//!
//! // Relative dates
//! let due = DateValue::today().days_ago(2);
//! let pay = DateValue::given_date(15, 5, 2012).months_ahead(4);
//!
//! // Locale-formatted strings, both directions
//! let date = DateValue::parse_with_locale("14.12.1972", DateLocale::DeDe)?;
//! assert_eq!(date.format_with_locale(DateLocale::EnUs), "Dec 14, 1972");
//!
//! // Back to chrono values
//! let day_only = date.to_date();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The `DateValue` type: constructors, offsets, accessors, conversions |
//! | `locale` | Supported locales and the process default locale |
//! | `format` | Parse/format seam over chrono's strftime machinery |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod locale;

pub use date::DateValue;
pub use error::DateError;
pub use locale::DateLocale;
