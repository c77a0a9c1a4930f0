//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

use std::future::Future;

use devgate_domain::device::{DeviceRegistration, DeviceSummary};
use devgate_domain::error::DevGateError;
use devgate_domain::tenant::Tenant;

/// Driven port over the upstream tenant/device metadata directory.
///
/// One method per upstream operation. Implementations perform a single
/// request/response round-trip per call — no caching, no retries, no
/// fan-out. Returned lists carry the upstream's original order; ordering is
/// the application layer's job.
pub trait MetadataDirectory {
    /// Fetch every tenant visible in the configured environment.
    fn list_tenants(&self) -> impl Future<Output = Result<Vec<Tenant>, DevGateError>> + Send;

    /// Fetch a single tenant by its opaque identifier.
    fn get_tenant(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = Result<Tenant, DevGateError>> + Send;

    /// Fetch the device summaries registered under a tenant.
    fn list_devices(
        &self,
        tenant_id: &str,
    ) -> impl Future<Output = Result<Vec<DeviceSummary>, DevGateError>> + Send;

    /// Fetch one device registration.
    fn get_device(
        &self,
        tenant_id: &str,
        device_id: &str,
    ) -> impl Future<Output = Result<DeviceRegistration, DevGateError>> + Send;

    /// Forward an updated registration and return the upstream's echoed
    /// result.
    fn put_device(
        &self,
        tenant_id: &str,
        device_id: &str,
        registration: DeviceRegistration,
    ) -> impl Future<Output = Result<DeviceRegistration, DevGateError>> + Send;
}
