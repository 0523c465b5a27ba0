use thiserror::Error;

/// Failures talking to the game API. Every variant names the endpoint that
/// produced it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response arrived.
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Request to {endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Unable to read {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidURL(String),
}
