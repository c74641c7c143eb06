/// Error handling for the client layer
///
/// The engine degrades gracefully on data-shape problems and never
/// errors; everything that *can* fail lives here, at the API boundary.
///
/// # Example
///
/// ```
/// use folioboard_client::error::{ClientError, ClientResult};
///
/// fn require_page_size(size: usize) -> ClientResult<usize> {
///     if size == 0 {
///         return Err(ClientError::InvalidRequest("page size must be positive".into()));
///     }
///     Ok(size)
/// }
/// ```

use serde::Deserialize;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Unified client error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend rejected the request with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the backend's error detail, if any
        message: String,
    },

    /// Missing or rejected credentials (401)
    #[error("Not authenticated")]
    Unauthorized,

    /// The requested entity does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request payload failed local validation
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A locally constructed request made no sense
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body shape used by the backend (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub detail: Option<String>,
}

impl ClientError {
    /// Maps a non-success HTTP status plus its error body to a variant
    pub(crate) fn from_status(status: u16, body: Option<ApiErrorBody>) -> Self {
        let message = body
            .and_then(|b| b.detail)
            .unwrap_or_else(|| "An unexpected error occurred".to_string());
        match status {
            401 => ClientError::Unauthorized,
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        }
    }
}
