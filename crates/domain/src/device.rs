//! Device records — summaries for list views, registrations for single-device
//! access.
//!
//! The upstream returns two shapes for the same device: a summary whose
//! metadata is flattened to a handful of display fields, and a registration
//! that keeps the full metadata map. Both are transient value objects,
//! reconstructed per request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Common device metadata fields for display in a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceMetaSummary {
    /// Deployment stage the device is registered in.
    pub environment: String,
    /// Device manufacturer.
    pub manufacturer: String,
    /// Model number.
    #[serde(rename = "modelNumber")]
    pub model: String,
    /// Serial number.
    #[serde(rename = "serialNumber")]
    pub serial: String,
}

/// Common device registration fields for display in a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSummary {
    /// Opaque device identifier, the sort key for list views.
    #[serde(rename = "deviceId")]
    pub device_id: String,
    /// Device type label.
    #[serde(rename = "deviceType")]
    pub device_type: String,
    /// Owning tenant.
    pub tenant: String,
    /// Device owner GUID.
    #[serde(rename = "deviceOwner")]
    pub device_owner: String,
    /// Flattened subset of the device metadata map.
    #[serde(rename = "metadata")]
    pub meta: DeviceMetaSummary,
}

/// Full-fidelity device record used for single-device get and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceRegistration {
    /// Opaque device identifier.
    #[serde(rename = "deviceId")]
    pub device_id: String,
    /// Device type label.
    #[serde(rename = "deviceType")]
    pub device_type: String,
    /// Owning tenant.
    pub tenant: String,
    /// Device owner GUID.
    #[serde(rename = "deviceOwner")]
    pub device_owner: String,
    /// Complete metadata map, passed through unmodified.
    #[serde(rename = "metadata")]
    pub meta: BTreeMap<String, String>,
}
