//! Supported locales and the process-wide default locale.

use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::error::DateError;

/// Pinned or detected default locale. `None` until first use.
static DEFAULT_LOCALE: RwLock<Option<DateLocale>> = RwLock::new(None);

/// Environment variables consulted for locale detection, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// A locale with a medium-style date pattern for parsing and formatting.
///
/// Each locale carries one strftime pattern used in both directions, so any
/// string produced by formatting parses back under the same locale. Patterns
/// are limited to tokens chrono can parse as well as format, which keeps
/// month names English-only; locales whose conventional medium style spells
/// out the month (e.g. French) use their numeric short style instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLocale {
    /// English (United States): `Dec 14, 1972`.
    EnUs,
    /// English (United Kingdom): `14 Dec 1972`.
    EnGb,
    /// German (Germany): `14.12.1972`.
    DeDe,
    /// French (France): `14/12/1972`.
    FrFr,
    /// Swedish (Sweden): `1972-12-14`.
    SvSe,
    /// Japanese (Japan): `1972/12/14`.
    JaJp,
}

impl DateLocale {
    /// All supported locales.
    pub const ALL: [DateLocale; 6] = [
        DateLocale::EnUs,
        DateLocale::EnGb,
        DateLocale::DeDe,
        DateLocale::FrFr,
        DateLocale::SvSe,
        DateLocale::JaJp,
    ];

    /// Returns the strftime date pattern for this locale.
    pub fn date_pattern(self) -> &'static str {
        match self {
            DateLocale::EnUs => "%b %-d, %Y",
            DateLocale::EnGb => "%-d %b %Y",
            DateLocale::DeDe => "%d.%m.%Y",
            DateLocale::FrFr => "%d/%m/%Y",
            DateLocale::SvSe => "%Y-%m-%d",
            DateLocale::JaJp => "%Y/%m/%d",
        }
    }

    /// Returns the BCP-47 tag for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            DateLocale::EnUs => "en-US",
            DateLocale::EnGb => "en-GB",
            DateLocale::DeDe => "de-DE",
            DateLocale::FrFr => "fr-FR",
            DateLocale::SvSe => "sv-SE",
            DateLocale::JaJp => "ja-JP",
        }
    }

    /// Returns the process-wide default locale.
    ///
    /// The first call detects the locale from the `LC_ALL`, `LC_TIME`, and
    /// `LANG` environment variables (in that order, first recognizable tag
    /// wins) and caches the result; `en-US` is the fallback when none of
    /// them names a supported locale. Use [`DateLocale::set_default`] to pin
    /// a different value.
    pub fn default_locale() -> Self {
        if let Some(locale) = *DEFAULT_LOCALE.read().unwrap_or_else(PoisonError::into_inner) {
            return locale;
        }
        let detected = Self::detect().unwrap_or(DateLocale::EnUs);
        let mut slot = DEFAULT_LOCALE
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have resolved the default in the meantime.
        *slot.get_or_insert(detected)
    }

    /// Pins the process-wide default locale and returns the previously
    /// effective default, so callers (tests in particular) can restore it:
    ///
    /// ```ignore
    /// let previous = DateLocale::set_default(DateLocale::DeDe);
    /// // ... assert locale-dependent behavior ...
    /// DateLocale::set_default(previous);
    /// ```
    pub fn set_default(locale: Self) -> Self {
        let previous = Self::default_locale();
        *DEFAULT_LOCALE
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(locale);
        previous
    }

    /// Detects a supported locale from the environment.
    fn detect() -> Option<Self> {
        for var in LOCALE_ENV_VARS {
            let Ok(value) = std::env::var(var) else {
                continue;
            };
            if let Ok(locale) = value.parse::<DateLocale>() {
                debug!(var, value = %value, locale = %locale, "default locale detected");
                return Some(locale);
            }
        }
        debug!("no supported locale in environment, falling back to en-US");
        None
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DateLocale {
    type Err = DateError;

    /// Parses a locale tag.
    ///
    /// Accepts BCP-47 (`en-US`), POSIX (`en_US`, `en_US.UTF-8`,
    /// `de_DE@euro`) and bare-language (`de`) spellings, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnknownLocale`] for any tag that does not name a
    /// supported locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip POSIX encoding and modifier suffixes ("de_DE.UTF-8@euro").
        let tag = match s.find(['.', '@']) {
            Some(end) => &s[..end],
            None => s,
        };
        match tag.replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(DateLocale::EnUs),
            "en-gb" => Ok(DateLocale::EnGb),
            "de-de" | "de" => Ok(DateLocale::DeDe),
            "fr-fr" | "fr" => Ok(DateLocale::FrFr),
            "sv-se" | "sv" => Ok(DateLocale::SvSe),
            "ja-jp" | "ja" => Ok(DateLocale::JaJp),
            _ => Err(DateError::UnknownLocale { tag: s.to_string() }),
        }
    }
}
