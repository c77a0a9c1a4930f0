//! HTTP implementation of [`MetadataDirectory`].

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use devgate_app::ports::MetadataDirectory;
use devgate_domain::device::{DeviceRegistration, DeviceSummary};
use devgate_domain::error::DevGateError;
use devgate_domain::tenant::Tenant;

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;

/// Client for the upstream tenant/device metadata directory.
///
/// Cheap to clone — all clones share one connection pool. Timeouts are the
/// reqwest defaults; there are no retries.
#[derive(Debug, Clone)]
pub struct UpstreamMetadataClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamMetadataClient {
    /// Create a new client for the configured upstream.
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn tenants_url(&self) -> String {
        format!(
            "{}/environment/{}/tenant",
            self.config.base(),
            self.config.environment_id
        )
    }

    fn tenant_url(&self, tenant_id: &str) -> String {
        format!("{}/{tenant_id}", self.tenants_url())
    }

    fn devices_url(&self, tenant_id: &str) -> String {
        format!("{}/metadata/{tenant_id}/device", self.config.base())
    }

    fn device_url(&self, tenant_id: &str, device_id: &str) -> String {
        format!("{}/{device_id}", self.devices_url(tenant_id))
    }

    fn device_update_url(&self, tenant_id: &str, device_id: &str) -> String {
        format!("{}/device/{device_id}", self.tenant_url(tenant_id))
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// The status code is deliberately not inspected: an upstream error page
    /// that is not valid JSON surfaces as a decode failure, a JSON body is
    /// returned as-is.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, UpstreamError> {
        let body = self.http.get(url).send().await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl MetadataDirectory for UpstreamMetadataClient {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, DevGateError> {
        tracing::debug!("loading tenants");
        Ok(self.get_json(self.tenants_url()).await?)
    }

    async fn get_tenant(&self, tenant_id: &str) -> Result<Tenant, DevGateError> {
        tracing::debug!(tenant = tenant_id, "loading tenant");
        Ok(self.get_json(self.tenant_url(tenant_id)).await?)
    }

    async fn list_devices(&self, tenant_id: &str) -> Result<Vec<DeviceSummary>, DevGateError> {
        tracing::debug!(tenant = tenant_id, "loading devices");
        Ok(self.get_json(self.devices_url(tenant_id)).await?)
    }

    async fn get_device(
        &self,
        tenant_id: &str,
        device_id: &str,
    ) -> Result<DeviceRegistration, DevGateError> {
        tracing::debug!(tenant = tenant_id, device = device_id, "loading device");
        Ok(self.get_json(self.device_url(tenant_id, device_id)).await?)
    }

    async fn put_device(
        &self,
        tenant_id: &str,
        device_id: &str,
        registration: DeviceRegistration,
    ) -> Result<DeviceRegistration, DevGateError> {
        tracing::debug!(tenant = tenant_id, device = device_id, "updating device");
        let payload = serde_json::to_vec(&registration).map_err(UpstreamError::from)?;
        let body = self
            .http
            .put(self.device_update_url(tenant_id, device_id))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(payload)
            .send()
            .await
            .map_err(UpstreamError::from)?
            .bytes()
            .await
            .map_err(UpstreamError::from)?;
        let updated = serde_json::from_slice(&body).map_err(UpstreamError::from)?;
        Ok(updated)
    }
}
