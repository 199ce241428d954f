use thiserror::Error;

/// Errors returned by [`ApiClient`](super::ApiClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to build the underlying HTTP client.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be sent or the connection failed.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Server returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    /// HTTP status code, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
