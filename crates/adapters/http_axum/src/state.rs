//! Shared application state for axum handlers.

use std::sync::Arc;

use devgate_app::ports::MetadataDirectory;
use devgate_app::services::device_service::DeviceService;
use devgate_app::services::tenant_service::TenantService;

/// Application state shared across all axum handlers.
///
/// Generic over the directory type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying type itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<D> {
    /// Tenant read service.
    pub tenant_service: Arc<TenantService<D>>,
    /// Device read/update service.
    pub device_service: Arc<DeviceService<D>>,
}

impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            tenant_service: Arc::clone(&self.tenant_service),
            device_service: Arc::clone(&self.device_service),
        }
    }
}

impl<D> AppState<D>
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(tenant_service: TenantService<D>, device_service: DeviceService<D>) -> Self {
        Self {
            tenant_service: Arc::new(tenant_service),
            device_service: Arc::new(device_service),
        }
    }
}
