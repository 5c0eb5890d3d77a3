//! Shareable journey URLs.
//!
//! Ties the pieces together: the locale picks the start page, the refresh
//! token is mined for the share payload, the share endpoint turns the
//! payload into a `vbid`, and the `vbid` becomes the start page's only
//! query parameter.

use std::sync::Arc;

use tracing::debug;
use url::form_urlencoded;

use crate::domain::{
    DEFAULT_LOCALE, JourneyInfo, LocaleObserver, TracingObserver, resolve_base_url,
};
use crate::share::{ShareClient, ShareError, SharePayload};

/// Append `vbid=<id>` to a start page URL.
///
/// The id is form-urlencoded, so spaces become `+` and reserved characters
/// are percent-escaped.
///
/// # Examples
///
/// ```
/// use db_share::assemble_url;
///
/// assert_eq!(
///     assemble_url("https://www.bahn.de/buchung/start?", "ABC123"),
///     "https://www.bahn.de/buchung/start?vbid=ABC123"
/// );
/// ```
pub fn assemble_url(base_url: &str, vbid: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("vbid", vbid)
        .finish();
    format!("{base_url}{query}")
}

/// Builds shareable journey URLs against a share endpoint.
#[derive(Clone)]
pub struct JourneyUrlGenerator {
    client: ShareClient,
    observer: Arc<dyn LocaleObserver>,
}

impl JourneyUrlGenerator {
    /// Create a generator that reports unknown locales through `tracing`.
    pub fn new(client: ShareClient) -> Self {
        Self {
            client,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer notified about unknown locales.
    pub fn with_observer(mut self, observer: impl LocaleObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    /// Build the shareable URL for a refresh token.
    ///
    /// `locale` defaults to English. Unusable tokens still produce a
    /// request; only a failed share request is an error.
    pub async fn generate(
        &self,
        refresh_token: &str,
        locale: Option<&str>,
    ) -> Result<String, ShareError> {
        let locale = locale.unwrap_or(DEFAULT_LOCALE);
        let base_url = resolve_base_url(locale, self.observer.as_ref());

        let info = JourneyInfo::from_token(refresh_token);
        debug!(?info, "parsed refresh token");

        let payload = SharePayload::new(refresh_token, &info);
        let vbid = self.client.request_vbid(&payload).await?;

        Ok(assemble_url(base_url, &vbid))
    }
}

/// Build a shareable URL using the production share endpoint.
///
/// Convenience wrapper around [`JourneyUrlGenerator`] with a fresh default
/// client; reuse a generator when making many calls.
pub async fn generate_db_journey_url(
    refresh_token: &str,
    locale: Option<&str>,
) -> Result<String, ShareError> {
    JourneyUrlGenerator::new(ShareClient::default_client()?)
        .generate(refresh_token, locale)
        .await
}
