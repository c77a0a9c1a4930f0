//! JSON REST handlers for tenant devices.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use devgate_app::ports::MetadataDirectory;
use devgate_domain::device::{DeviceRegistration, DeviceSummary};
use devgate_domain::error::DevGateError;

use crate::api::require_param;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DeviceSummary>>),
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
    Ok(Json<DeviceRegistration>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<DeviceRegistration>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET {base}/tenant/:tenant/device`
pub async fn list<D>(
    State(state): State<AppState<D>>,
    Path(tenant): Path<String>,
) -> Result<ListResponse, ApiError>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    let tenant_id = require_param("tenant", &tenant)?;
    let devices = state.device_service.list_devices(tenant_id).await?;
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET {base}/tenant/:tenant/device/:device`
pub async fn get<D>(
    State(state): State<AppState<D>>,
    Path((tenant, device)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    let tenant_id = require_param("tenant", &tenant)?;
    let device_id = require_param("device", &device)?;
    let registration = state.device_service.get_device(tenant_id, device_id).await?;
    Ok(GetResponse::Ok(Json(registration)))
}

/// `PUT {base}/tenant/:tenant/device/:device`
///
/// The body is decoded by hand rather than through the `Json` extractor: a
/// malformed registration counts as a server-side decode failure (500), the
/// same bucket as a malformed upstream response.
pub async fn update<D>(
    State(state): State<AppState<D>>,
    Path((tenant, device)): Path<(String, String)>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    let tenant_id = require_param("tenant", &tenant)?;
    let device_id = require_param("device", &device)?;
    let registration: DeviceRegistration =
        serde_json::from_slice(&body).map_err(DevGateError::decode)?;
    let updated = state
        .device_service
        .update_device(tenant_id, device_id, registration)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}
