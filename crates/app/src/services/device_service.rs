//! Device service — use-cases for reading and updating device records.

use devgate_domain::device::{DeviceRegistration, DeviceSummary};
use devgate_domain::error::DevGateError;
use devgate_domain::ordering;

use crate::ports::MetadataDirectory;

/// Application service for device lookups and updates.
pub struct DeviceService<D> {
    directory: D,
}

impl<D: MetadataDirectory> DeviceService<D> {
    /// Create a new service backed by the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// List the device summaries under a tenant, sorted by device id
    /// ascending.
    ///
    /// The sort is stable: duplicate ids keep the upstream's relative order.
    ///
    /// # Errors
    ///
    /// Propagates [`DevGateError::Upstream`] or [`DevGateError::Decode`]
    /// from the directory.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self, tenant_id: &str) -> Result<Vec<DeviceSummary>, DevGateError> {
        let mut devices = self.directory.list_devices(tenant_id).await?;
        ordering::sort_device_summaries(&mut devices);
        Ok(devices)
    }

    /// Look up one device registration.
    ///
    /// # Errors
    ///
    /// Propagates [`DevGateError::Upstream`] or [`DevGateError::Decode`]
    /// from the directory.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(
        &self,
        tenant_id: &str,
        device_id: &str,
    ) -> Result<DeviceRegistration, DevGateError> {
        self.directory.get_device(tenant_id, device_id).await
    }

    /// Forward an updated registration to the directory and return the
    /// upstream's echoed result unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`DevGateError::Upstream`] or [`DevGateError::Decode`]
    /// from the directory.
    #[tracing::instrument(skip(self, registration))]
    pub async fn update_device(
        &self,
        tenant_id: &str,
        device_id: &str,
        registration: DeviceRegistration,
    ) -> Result<DeviceRegistration, DevGateError> {
        self.directory
            .put_device(tenant_id, device_id, registration)
            .await
    }
}
