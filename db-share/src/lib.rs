//! Shareable Deutsche Bahn journey URLs.
//!
//! Turns a booking-site refresh token into a link that reopens the same
//! connection on bahn.de: the token is mined for departure date and
//! stations, the share endpoint hands back a `vbid`, and the `vbid` is
//! appended to the booking start page for the requested language.

pub mod domain;
pub mod journey_url;
pub mod share;

pub use journey_url::{JourneyUrlGenerator, assemble_url, generate_db_journey_url};
