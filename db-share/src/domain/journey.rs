//! Journey metadata carried inside a refresh token.
//!
//! A refresh token is opaque, but two kinds of segment are recognisable in
//! it: the departure timestamp as `$YYYYMMDDHHMM$`, and one `@O=<code>@`
//! marker per station on the connection. Tokens missing either kind still
//! parse; the corresponding fields are simply absent.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::warn;

use super::station::StationCode;
use super::time::berlin_to_utc;

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]{12})\$").expect("timestamp pattern is valid"));

static STATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@O=([^@]*)@").expect("station pattern is valid"));

/// The departure recorded in a token's timestamp segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    /// The digits name a real Berlin local time.
    At(DateTime<Utc>),

    /// Twelve digits were present but name no real time (month 13, Feb 30).
    Invalid,
}

impl Departure {
    /// The departure instant, if the digits were usable.
    pub fn instant(self) -> Option<DateTime<Utc>> {
        match self {
            Departure::At(dt) => Some(dt),
            Departure::Invalid => None,
        }
    }
}

/// Date and end points of the journey a refresh token describes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JourneyInfo {
    /// Departure, if the token carries a timestamp segment at all.
    pub date: Option<Departure>,

    /// First station marker in the token.
    pub origin: Option<StationCode>,

    /// Last station marker in the token.
    pub destination: Option<StationCode>,
}

impl JourneyInfo {
    /// Extract journey metadata from a refresh token.
    ///
    /// Never fails; unrecognised tokens yield an all-absent `JourneyInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use db_share::domain::JourneyInfo;
    ///
    /// let info = JourneyInfo::from_token("¶HKI¶T$A=1@O=8000105@$202401151230$@O=8000207@");
    /// assert_eq!(info.origin.unwrap().as_str(), "8000105");
    /// assert_eq!(info.destination.unwrap().as_str(), "8000207");
    /// assert!(info.date.is_some());
    ///
    /// assert_eq!(JourneyInfo::from_token("garbage"), JourneyInfo::default());
    /// ```
    pub fn from_token(refresh_token: &str) -> Self {
        let date = departure_from_token(refresh_token);
        let mut stations = stations_from_token(refresh_token);

        let destination = stations.pop();
        let origin = if stations.is_empty() {
            destination.clone()
        } else {
            Some(stations.swap_remove(0))
        };

        Self {
            date,
            origin,
            destination,
        }
    }
}

/// Departure from the first `$YYYYMMDDHHMM$` segment.
///
/// Returns `None` when no segment is present, and `Departure::Invalid` when
/// the digits do not form a valid Berlin local time.
pub fn departure_from_token(refresh_token: &str) -> Option<Departure> {
    let caps = TIMESTAMP.captures(refresh_token)?;
    let digits = caps.get(1)?.as_str();

    match berlin_to_utc(digits) {
        Ok(dt) => Some(Departure::At(dt)),
        Err(e) => {
            warn!(digits, error = %e, "unusable timestamp in refresh token");
            Some(Departure::Invalid)
        }
    }
}

/// All `@O=<code>@` station codes, in order of appearance.
pub fn stations_from_token(refresh_token: &str) -> Vec<StationCode> {
    STATION
        .captures_iter(refresh_token)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| StationCode::parse(m.as_str()))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn station_code()(code in "[^@]{0,12}") -> String {
            code
        }
    }

    proptest! {
        #[test]
        fn from_token_never_panics(token in ".*") {
            let _ = JourneyInfo::from_token(&token);
        }

        #[test]
        fn ends_are_first_and_last_marker(
            codes in prop::collection::vec(station_code(), 1..6),
            filler in "[a-z$]{0,5}",
        ) {
            let token: String = codes
                .iter()
                .map(|c| format!("@O={c}@{filler}"))
                .collect();

            let info = JourneyInfo::from_token(&token);
            let origin = info.origin.map(String::from);
            let destination = info.destination.map(String::from);
            prop_assert_eq!(origin.as_ref(), codes.first());
            prop_assert_eq!(destination.as_ref(), codes.last());
        }
    }
}
