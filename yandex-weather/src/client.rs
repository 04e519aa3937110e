//! HTTP client for the Yandex.Weather forecast endpoint.

use std::time::Duration;

use reqwest::StatusCode;

use crate::error::Error;
use crate::model::WeatherResponse;

/// Base URL of the Yandex.Weather forecast endpoint.
pub const BASE_URL: &str = "https://api.weather.yandex.ru/v2/forecast";

/// Header carrying the API key. The key never goes into the query string,
/// so it cannot leak through logged URLs.
pub const API_KEY_HEADER: &str = "X-Yandex-API-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Yandex.Weather API.
///
/// Holds the API key and a connection pool; cheap to clone and safe to
/// share across tasks. Each call issues a single request with a 10-second
/// timeout and no retries. Dropping the returned future aborts the
/// request, so callers impose their own deadlines with the usual async
/// tools (e.g. `tokio::time::timeout`).
#[derive(Debug, Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Init)?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            http,
        })
    }

    /// Point the client at a different endpoint, e.g. a test server or a
    /// proxy.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the forecast for the given coordinates.
    ///
    /// `lang` selects the response language (empty means the API default);
    /// `limit` is the number of forecast days, `0` meaning "let the API
    /// decide" (the documented range is 1–7, but values are passed through
    /// unvalidated); `hours` requests the hourly breakdown. Coordinates are
    /// not range-checked locally.
    pub async fn get_forecast(
        &self,
        lat: f64,
        lon: f64,
        lang: &str,
        limit: u32,
        hours: bool,
    ) -> Result<WeatherResponse, Error> {
        let query = build_query(lat, lon, lang, limit, hours);

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(Error::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Body)?;

        if status != StatusCode::OK {
            return Err(Error::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch only the current conditions: one forecast day, no hourly
    /// breakdown.
    pub async fn get_current(
        &self,
        lat: f64,
        lon: f64,
        lang: &str,
    ) -> Result<WeatherResponse, Error> {
        self.get_forecast(lat, lon, lang, 1, false).await
    }
}

/// Query parameters in the order the API documents them. Coordinates are
/// fixed to six decimal places; `lang` and `limit` are omitted when unset;
/// `hours` is always sent explicitly.
fn build_query(lat: f64, lon: f64, lang: &str, limit: u32, hours: bool) -> Vec<(&'static str, String)> {
    let mut query = vec![("lat", format!("{lat:.6}")), ("lon", format!("{lon:.6}"))];

    if !lang.is_empty() {
        query.push(("lang", lang.to_string()));
    }
    if limit > 0 {
        query.push(("limit", limit.to_string()));
    }
    query.push(("hours", hours.to_string()));

    query
}
