//! JSON REST handlers for tenants.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use devgate_app::ports::MetadataDirectory;
use devgate_domain::tenant::Tenant;

use crate::api::require_param;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Tenant>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Tenant>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET {base}/tenant`
pub async fn list<D>(State(state): State<AppState<D>>) -> Result<ListResponse, ApiError>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    let tenants = state.tenant_service.list_tenants().await?;
    Ok(ListResponse::Ok(Json(tenants)))
}

/// `GET {base}/tenant/:tenant`
pub async fn get<D>(
    State(state): State<AppState<D>>,
    Path(tenant): Path<String>,
) -> Result<GetResponse, ApiError>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    let tenant_id = require_param("tenant", &tenant)?;
    let tenant = state.tenant_service.get_tenant(tenant_id).await?;
    Ok(GetResponse::Ok(Json(tenant)))
}
