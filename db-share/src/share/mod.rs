//! Client for the bahn.de connection-sharing endpoint.
//!
//! The booking site shares a connection by posting what it knows about the
//! journey and getting back a `vbid` ("Verbindungs-ID"). The `vbid` alone is
//! enough for the start page to reconstruct the connection.

mod client;
mod error;
mod types;

pub use client::{ShareClient, ShareConfig};
pub use error::ShareError;
pub use types::{SharePayload, ShareResponse};
