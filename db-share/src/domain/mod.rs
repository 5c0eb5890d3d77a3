//! Domain types for journey sharing.
//!
//! Everything here is pure: token parsing, Berlin wall-clock conversion and
//! the locale table. Nothing in this module touches the network.

mod journey;
mod locale;
mod station;
mod time;

pub use journey::{Departure, JourneyInfo, departure_from_token, stations_from_token};
pub use locale::{
    DEFAULT_LOCALE, Locale, LocaleObserver, TracingObserver, UnknownLocale, resolve_base_url,
};
pub use station::StationCode;
pub use time::{TimeError, berlin_to_utc, to_iso_millis};
