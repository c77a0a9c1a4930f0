//! Upstream-specific error type wrapping reqwest errors.

use devgate_domain::error::DevGateError;

/// Errors originating from the upstream HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request could not be built or the transport failed.
    #[error("upstream transport error")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("JSON deserialization error")]
    Json(#[from] serde_json::Error),
}

impl From<UpstreamError> for DevGateError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Transport(inner) => Self::Upstream(Box::new(inner)),
            UpstreamError::Json(inner) => Self::Decode(Box::new(inner)),
        }
    }
}
