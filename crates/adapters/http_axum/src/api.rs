//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod tenants;

use axum::Router;
use axum::routing::get;

use devgate_app::ports::MetadataDirectory;
use devgate_domain::error::MissingParameterError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API sub-router, mounted under the configured base path.
pub fn routes<D>() -> Router<AppState<D>>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    Router::new()
        .route("/tenant", get(tenants::list::<D>))
        .route("/tenant/{tenant}", get(tenants::get::<D>))
        .route("/tenant/{tenant}/device", get(devices::list::<D>))
        .route(
            "/tenant/{tenant}/device/{device}",
            get(devices::get::<D>).put(devices::update::<D>),
        )
}

/// Reject absent or empty path parameters before any upstream work happens.
pub(crate) fn require_param<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.is_empty() {
        return Err(ApiError::from(MissingParameterError { name }));
    }
    Ok(value)
}
