use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// The taxonomy is flat: every variant means "this call failed", with the
/// underlying cause preserved for diagnostics. The library never retries
/// and never logs.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    /// The request could not be built or sent (DNS, connection, timeout,
    /// cancellation).
    #[error("failed to send request to Yandex.Weather: {0}")]
    Request(#[source] reqwest::Error),

    /// The API answered with a status other than 200. Carries the raw
    /// body verbatim for diagnosis.
    #[error("Yandex.Weather returned status {status}: {body}")]
    Status {
        status: StatusCode,
        body: String,
    },

    /// The response body could not be read after the headers arrived.
    #[error("failed to read Yandex.Weather response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was not valid JSON for the expected schema.
    #[error("failed to decode Yandex.Weather response: {0}")]
    Decode(#[from] serde_json::Error),
}
