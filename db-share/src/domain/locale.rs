//! Booking-site languages and their start pages.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

/// Locale used when the caller does not ask for one.
pub const DEFAULT_LOCALE: &str = "en";

/// Error returned when parsing a locale outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

/// A language the booking site can be opened in.
///
/// German goes to the domestic site; every other language is served from
/// the international site under a language path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Cs,
    Da,
    De,
    #[default]
    En,
    Es,
    Fr,
    It,
    Nl,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 8] = [
        Locale::Cs,
        Locale::Da,
        Locale::De,
        Locale::En,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Nl,
    ];

    /// Look up a locale by its exact two-letter code.
    ///
    /// Matching is case-sensitive: `"DE"` is not German.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// The two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Cs => "cs",
            Locale::Da => "da",
            Locale::De => "de",
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Nl => "nl",
        }
    }

    /// Booking start page, ending in `?` ready for a query string.
    pub fn base_url(self) -> &'static str {
        match self {
            Locale::De => "https://www.bahn.de/buchung/start?",
            Locale::Cs => "https://int.bahn.de/cs/buchung/start?",
            Locale::Da => "https://int.bahn.de/da/buchung/start?",
            Locale::En => "https://int.bahn.de/en/buchung/start?",
            Locale::Es => "https://int.bahn.de/es/buchung/start?",
            Locale::Fr => "https://int.bahn.de/fr/buchung/start?",
            Locale::It => "https://int.bahn.de/it/buchung/start?",
            Locale::Nl => "https://int.bahn.de/nl/buchung/start?",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Receives notice of locale codes that had to fall back to the default.
pub trait LocaleObserver: Send + Sync {
    fn unknown_locale(&self, code: &str);
}

impl<T: LocaleObserver + ?Sized> LocaleObserver for Arc<T> {
    fn unknown_locale(&self, code: &str) {
        (**self).unknown_locale(code);
    }
}

/// Reports unknown locales as `tracing` info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LocaleObserver for TracingObserver {
    fn unknown_locale(&self, code: &str) {
        info!(locale = code, "unknown locale, using default URL");
    }
}

/// Resolve a locale code to its booking start page.
///
/// Unknown codes (including `pl`, which the booking site has but this
/// table does not) are reported to `observer` once and fall back to English.
pub fn resolve_base_url(code: &str, observer: &dyn LocaleObserver) -> &'static str {
    match Locale::parse(code) {
        Some(locale) => locale.base_url(),
        None => {
            observer.unknown_locale(code);
            Locale::default().base_url()
        }
    }
}
