//! Share endpoint request and response bodies.
//!
//! Field names follow the booking site's German API. Fields the token did
//! not yield are left out of the request entirely, which is what the booking
//! site's own frontend does. The one `null` it sends is for a timestamp
//! segment whose digits name no real time.

use serde::{Deserialize, Serialize};

use crate::domain::{Departure, JourneyInfo, to_iso_millis};

/// Body of the share request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Outbound departure, ISO 8601 UTC with milliseconds.
    ///
    /// Outer `None`: no timestamp in the token, key omitted.
    /// `Some(None)`: unusable timestamp, sent as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hinfahrt_datum: Option<Option<String>>,

    /// The refresh token, passed through untouched.
    pub hinfahrt_recon: String,

    /// Origin station code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ort: Option<String>,

    /// Destination station code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ziel_ort: Option<String>,
}

impl SharePayload {
    /// Build the payload for a token and the journey info parsed from it.
    pub fn new(refresh_token: &str, info: &JourneyInfo) -> Self {
        Self {
            hinfahrt_datum: info
                .date
                .map(|d| d.instant().as_ref().map(to_iso_millis)),
            hinfahrt_recon: refresh_token.to_string(),
            start_ort: info.origin.as_ref().map(|s| s.as_str().to_string()),
            ziel_ort: info.destination.as_ref().map(|s| s.as_str().to_string()),
        }
    }
}

/// Response from the share endpoint.
///
/// The endpoint returns more than this, but only the `vbid` is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareResponse {
    pub vbid: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_full_payload() {
        let token = "@O=8000105@$202401151230$@O=8000207@";
        let payload = SharePayload::new(token, &JourneyInfo::from_token(token));

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "hinfahrtDatum": "2024-01-15T11:30:00.000Z",
                "hinfahrtRecon": token,
                "startOrt": "8000105",
                "zielOrt": "8000207"
            })
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let payload = SharePayload::new("opaque", &JourneyInfo::default());

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"hinfahrtRecon":"opaque"}"#);
    }

    #[test]
    fn invalid_date_is_sent_as_null() {
        let token = "$202413011230$@O=8000105@";
        let payload = SharePayload::new(token, &JourneyInfo::from_token(token));

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "hinfahrtDatum": null,
                "hinfahrtRecon": token,
                "startOrt": "8000105",
                "zielOrt": "8000105"
            })
        );
    }

    #[test]
    fn end_of_day_date_is_next_midnight() {
        let token = "$202401152400$";
        let payload = SharePayload::new(token, &JourneyInfo::from_token(token));

        assert_eq!(
            payload.hinfahrt_datum,
            Some(Some("2024-01-15T23:00:00.000Z".to_string()))
        );
    }

    #[test]
    fn deserialize_response() {
        let json = r#"{"vbid": "9dd9db26-4ffc-411c-b79c-e82bf5338989", "extra": 1}"#;
        let response: ShareResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.vbid, "9dd9db26-4ffc-411c-b79c-e82bf5338989");
    }

    #[test]
    fn response_without_vbid_is_rejected() {
        assert!(serde_json::from_str::<ShareResponse>("{}").is_err());
        assert!(serde_json::from_str::<ShareResponse>(r#"{"vbid": 42}"#).is_err());
    }
}
