//! The fluent calendar date value.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::trace;

use crate::error::DateError;
use crate::format;
use crate::locale::DateLocale;

/// A calendar date with fluent relative offsets, for test fixtures.
///
/// Wraps a single [`NaiveDateTime`] instant whose time-of-day is midnight on
/// every construction path except [`DateValue::from_datetime`]. Offsets
/// consume and return the value, so calls chain left to right:
///
/// ```ignore
/// let due = DateValue::today().days_ago(2);
/// let pay = DateValue::given_date(15, 5, 2012).months_ahead(4);
/// ```
///
/// Equality, ordering, and hashing compare the underlying instant, so a
/// value carrying a nonzero time-of-day is not equal to the same calendar
/// day at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateValue {
    instant: NaiveDateTime,
}

impl DateValue {
    /// Creates a value holding the current local date, time zeroed.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Creates a value from explicit day, month, and year fields.
    ///
    /// Fields are resolved leniently, the way a lenient Gregorian calendar
    /// resolves them: out-of-range values roll over into the neighboring
    /// month or year instead of failing. `given_date(31, 4, 2000)` is
    /// 1 May 2000, `given_date(1, 13, 2000)` is 1 Jan 2001, and
    /// `given_date(0, 3, 2000)` is the last day of February 2000.
    ///
    /// # Panics
    ///
    /// Panics if the resolved date falls outside the supported year range
    /// (roughly ±262,000 years).
    pub fn given_date(day: i32, month: i32, year: i32) -> Self {
        // Fold the month into the year first, then let day offsets carry
        // across month boundaries from the first of the resolved month.
        let months = i64::from(year) * 12 + i64::from(month) - 1;
        let first = i32::try_from(months.div_euclid(12))
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, (months.rem_euclid(12) + 1) as u32, 1))
            .expect("resolved fields leave the supported date range");
        let date = first
            .checked_add_signed(TimeDelta::days(i64::from(day) - 1))
            .expect("resolved fields leave the supported date range");
        Self::from_date(date)
    }

    /// Creates a value from a date-only representation, time zeroed.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            instant: date.and_time(NaiveTime::MIN),
        }
    }

    /// Creates a value from an existing datetime, copying the instant
    /// verbatim.
    ///
    /// Unlike every other constructor, this path does not normalize the
    /// time-of-day to midnight: the source's time component is preserved,
    /// and the result compares unequal to the same calendar day built via
    /// [`DateValue::given_date`]. Call [`DateValue::from_date`] on
    /// `instant.date()` to drop the time component instead.
    pub fn from_datetime(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Parses a date string using the process default locale's pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if the text does not match the default
    /// locale's date pattern.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        Self::parse_with_locale(text, DateLocale::default_locale())
    }

    /// Parses a date string using the given locale's pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if the text does not match the locale's
    /// date pattern.
    pub fn parse_with_locale(text: &str, locale: DateLocale) -> Result<Self, DateError> {
        Self::parse_with_pattern(text, locale.date_pattern())
    }

    /// Parses a date string using an explicit strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Parse`] if the text does not match the pattern.
    pub fn parse_with_pattern(text: &str, pattern: &str) -> Result<Self, DateError> {
        let date = format::parse_date(text, pattern)?;
        trace!(text, pattern, %date, "parsed date string");
        Ok(Self::from_date(date))
    }

    /// Returns the value shifted backward by the given number of days.
    ///
    /// A negative count shifts forward.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported year range.
    pub fn days_ago(self, days: i32) -> Self {
        self.shift_days(-i64::from(days))
    }

    /// Returns the value shifted forward by the given number of days.
    ///
    /// A negative count shifts backward.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported year range.
    pub fn days_ahead(self, days: i32) -> Self {
        self.shift_days(i64::from(days))
    }

    /// Returns the value shifted backward by the given number of months.
    ///
    /// A negative count shifts forward. The day is clamped to the length of
    /// the target month, so one month before 31 March is 28 (or 29)
    /// February.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported year range.
    pub fn months_ago(self, months: i32) -> Self {
        self.shift_months(-i64::from(months))
    }

    /// Returns the value shifted forward by the given number of months.
    ///
    /// A negative count shifts backward. The day is clamped to the length
    /// of the target month, so one month after 31 January is 28 (or 29)
    /// February.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported year range.
    pub fn months_ahead(self, months: i32) -> Self {
        self.shift_months(i64::from(months))
    }

    /// Returns the value shifted backward by the given number of years.
    ///
    /// A negative count shifts forward. 29 February clamps to 28 February
    /// on non-leap target years.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported year range.
    pub fn years_ago(self, years: i32) -> Self {
        self.shift_months(-12 * i64::from(years))
    }

    /// Returns the value shifted forward by the given number of years.
    ///
    /// A negative count shifts backward. 29 February clamps to 28 February
    /// on non-leap target years.
    ///
    /// # Panics
    ///
    /// Panics if the shifted date leaves the supported year range.
    pub fn years_ahead(self, years: i32) -> Self {
        self.shift_months(12 * i64::from(years))
    }

    /// Returns the day of the month (1..=31).
    pub fn day(self) -> u32 {
        self.instant.day()
    }

    /// Returns the month of the year (1..=12).
    pub fn month(self) -> u32 {
        self.instant.month()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.instant.year()
    }

    /// Returns the underlying instant.
    ///
    /// The time-of-day is midnight unless the value was built via
    /// [`DateValue::from_datetime`].
    pub fn to_datetime(self) -> NaiveDateTime {
        self.instant
    }

    /// Returns the date-only representation of the underlying instant.
    pub fn to_date(self) -> NaiveDate {
        self.instant.date()
    }

    /// Formats the date with the given locale's pattern.
    pub fn format_with_locale(self, locale: DateLocale) -> String {
        format::format_date(self.instant.date(), locale.date_pattern())
    }

    fn shift_days(self, days: i64) -> Self {
        let shifted = TimeDelta::try_days(days)
            .and_then(|delta| self.instant.checked_add_signed(delta))
            .expect("day offset leaves the supported date range");
        Self { instant: shifted }
    }

    fn shift_months(self, months: i64) -> Self {
        let shifted = if months >= 0 {
            u32::try_from(months)
                .ok()
                .and_then(|m| self.instant.checked_add_months(Months::new(m)))
        } else {
            u32::try_from(-months)
                .ok()
                .and_then(|m| self.instant.checked_sub_months(Months::new(m)))
        };
        Self {
            instant: shifted.expect("month offset leaves the supported date range"),
        }
    }
}

impl fmt::Display for DateValue {
    /// Formats the date with the process default locale's pattern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_locale(DateLocale::default_locale()))
    }
}
