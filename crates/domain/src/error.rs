//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DevGateError`] at the boundary. Adapters wrap their library errors
//! (`reqwest`, `serde_json`) in a boxed source so this crate stays free of
//! IO dependencies.

use std::error::Error;

/// A required path parameter was absent or empty.
#[derive(Debug, thiserror::Error)]
#[error("{name} not recognized")]
pub struct MissingParameterError {
    /// Name of the parameter (`tenant` or `device`).
    pub name: &'static str,
}

/// Base error enum for the devgate workspace.
#[derive(Debug, thiserror::Error)]
pub enum DevGateError {
    /// A required path parameter was absent or empty.
    #[error("missing parameter")]
    MissingParameter(#[from] MissingParameterError),

    /// The upstream directory could not be reached.
    #[error("upstream request failed")]
    Upstream(#[source] Box<dyn Error + Send + Sync>),

    /// A payload could not be decoded as the expected shape.
    #[error("malformed payload")]
    Decode(#[source] Box<dyn Error + Send + Sync>),
}

impl DevGateError {
    /// Wrap a transport failure.
    pub fn upstream<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Upstream(Box::new(err))
    }

    /// Wrap a decode failure.
    pub fn decode<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Decode(Box::new(err))
    }
}
