//! Tenant — a customer/account scope in the upstream metadata directory.

use serde::{Deserialize, Serialize};

/// A tenant record as returned by the upstream directory.
///
/// Carries the device-owner GUID for the environment and tenant. Field names
/// follow the upstream wire format; the name is omitted entirely for unnamed
/// tenants, both inbound and outbound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tenant {
    /// Tenant display name, absent for unnamed tenants.
    #[serde(rename = "tenant", skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    /// Deployment stage label (`dev`, `prod`, …).
    pub environment: String,
    /// Opaque GUID of the device owner.
    #[serde(rename = "deviceOwner")]
    pub device_owner_id: String,
}

impl Tenant {
    /// Name used for ordering; unnamed tenants sort as the empty string.
    #[must_use]
    pub fn sort_name(&self) -> &str {
        self.tenant_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_upstream_field_names_when_serializing() {
        let tenant = Tenant {
            tenant_name: Some("acme".to_string()),
            environment: "prod".to_string(),
            device_owner_id: "owner-1".to_string(),
        };

        let json = serde_json::to_value(&tenant).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tenant": "acme",
                "environment": "prod",
                "deviceOwner": "owner-1",
            })
        );
    }

    #[test]
    fn should_omit_name_when_absent() {
        let tenant = Tenant {
            tenant_name: None,
            environment: "dev".to_string(),
            device_owner_id: "owner-2".to_string(),
        };

        let json = serde_json::to_string(&tenant).unwrap();
        assert!(!json.contains("tenant"));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let tenant = Tenant {
            tenant_name: Some("acme".to_string()),
            environment: "prod".to_string(),
            device_owner_id: "owner-1".to_string(),
        };

        let json = serde_json::to_string(&tenant).unwrap();
        let parsed: Tenant = serde_json::from_str(&json).unwrap();
        assert_eq!(tenant, parsed);
    }

    #[test]
    fn should_tolerate_missing_fields_when_deserializing() {
        let tenant: Tenant = serde_json::from_str(r#"{"environment":"dev"}"#).unwrap();
        assert!(tenant.tenant_name.is_none());
        assert_eq!(tenant.environment, "dev");
        assert_eq!(tenant.device_owner_id, "");
    }

    #[test]
    fn should_sort_unnamed_tenants_as_empty_string() {
        let tenant = Tenant::default();
        assert_eq!(tenant.sort_name(), "");
    }
}
