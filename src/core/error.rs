use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Note that [`ProfileBuilder::fetch`](crate::ProfileBuilder::fetch) never
/// surfaces this type; lookups degrade to a default profile instead. Errors
/// appear only on client construction and internal request paths.
#[derive(Debug, Error)]
pub enum IgError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// No API token was configured.
    #[error("Auth error: {0}")]
    Auth(String),

    /// The data received from the API was in an unexpected format.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
