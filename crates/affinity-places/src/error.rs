use thiserror::Error;

/// Errors returned by the Google Places and Translate clients.
///
/// HTTP errors have their URL stripped before they are wrapped, because the
/// API key travels in the query string and these errors end up in logs.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure, or a non-2xx status with no parseable error body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a failure status, e.g. `REQUEST_DENIED`,
    /// `OVER_QUERY_LIMIT`, or a Translate `{"error": {...}}` envelope.
    #[error("API error {status}: {message}")]
    Api { status: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PlacesError {
    /// Wraps a `reqwest` error with its URL (and therefore the key) removed.
    pub(crate) fn http(err: reqwest::Error) -> Self {
        PlacesError::Http(err.without_url())
    }
}
