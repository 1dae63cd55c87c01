/// Failure of a single call to the listing backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Any non-2xx answer. The body is not inspected.
    #[error("Request failed with status {0}")]
    RequestFailed(u16),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Token not found: {0}")]
    NotFound(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
