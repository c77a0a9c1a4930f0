//! Tenant service — use-cases for reading tenants.

use devgate_domain::error::DevGateError;
use devgate_domain::ordering;
use devgate_domain::tenant::Tenant;

use crate::ports::MetadataDirectory;

/// Application service for tenant lookups.
pub struct TenantService<D> {
    directory: D,
}

impl<D: MetadataDirectory> TenantService<D> {
    /// Create a new service backed by the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// List all tenants, sorted by (environment, tenant name) ascending.
    ///
    /// The sort is stable: tenants with equal keys keep the upstream's
    /// relative order.
    ///
    /// # Errors
    ///
    /// Propagates [`DevGateError::Upstream`] or [`DevGateError::Decode`]
    /// from the directory.
    #[tracing::instrument(skip(self))]
    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, DevGateError> {
        let mut tenants = self.directory.list_tenants().await?;
        ordering::sort_tenants(&mut tenants);
        Ok(tenants)
    }

    /// Look up a single tenant by its opaque identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`DevGateError::Upstream`] or [`DevGateError::Decode`]
    /// from the directory.
    #[tracing::instrument(skip(self))]
    pub async fn get_tenant(&self, tenant_id: &str) -> Result<Tenant, DevGateError> {
        self.directory.get_tenant(tenant_id).await
    }
}
