//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use devgate_domain::error::{DevGateError, MissingParameterError};

/// Maps [`DevGateError`] to an HTTP response with appropriate status code.
///
/// Upstream and decode failures carry no detail to the client — the body is
/// empty and the cause goes to the server-side log only.
pub struct ApiError(DevGateError);

impl From<DevGateError> for ApiError {
    fn from(err: DevGateError) -> Self {
        Self(err)
    }
}

impl From<MissingParameterError> for ApiError {
    fn from(err: MissingParameterError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DevGateError::MissingParameter(err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            DevGateError::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            DevGateError::Decode(err) => {
                tracing::error!(error = %err, "payload decode failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_parameter_to_bad_request() {
        let response =
            ApiError::from(MissingParameterError { name: "tenant" }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_upstream_failure_to_internal_error() {
        let err = DevGateError::upstream(std::io::Error::other("connection refused"));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_decode_failure_to_internal_error() {
        let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let response = ApiError::from(DevGateError::decode(cause)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
