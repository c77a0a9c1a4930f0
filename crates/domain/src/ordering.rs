//! Deterministic ordering for list payloads.
//!
//! The upstream returns records in arbitrary order; list endpoints apply
//! these stable sorts so equal keys keep their upstream relative order.

use crate::device::DeviceSummary;
use crate::tenant::Tenant;

/// Sort tenants by (environment, tenant name) ascending, stable.
pub fn sort_tenants(tenants: &mut [Tenant]) {
    tenants.sort_by(|a, b| {
        a.environment
            .cmp(&b.environment)
            .then_with(|| a.sort_name().cmp(b.sort_name()))
    });
}

/// Sort device summaries by device id ascending, stable.
pub fn sort_device_summaries(devices: &mut [DeviceSummary]) {
    devices.sort_by(|a, b| a.device_id.cmp(&b.device_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(name: Option<&str>, environment: &str, owner: &str) -> Tenant {
        Tenant {
            tenant_name: name.map(str::to_string),
            environment: environment.to_string(),
            device_owner_id: owner.to_string(),
        }
    }

    fn summary(device_id: &str, owner: &str) -> DeviceSummary {
        DeviceSummary {
            device_id: device_id.to_string(),
            device_owner: owner.to_string(),
            ..DeviceSummary::default()
        }
    }

    #[test]
    fn should_sort_tenants_by_environment_then_name() {
        let mut tenants = vec![
            tenant(Some("B"), "prod", "u1"),
            tenant(Some("A"), "dev", "u2"),
            tenant(Some("A"), "prod", "u3"),
        ];

        sort_tenants(&mut tenants);

        let keys: Vec<_> = tenants
            .iter()
            .map(|t| (t.environment.as_str(), t.sort_name()))
            .collect();
        assert_eq!(keys, vec![("dev", "A"), ("prod", "A"), ("prod", "B")]);
    }

    #[test]
    fn should_keep_upstream_order_for_equal_tenant_keys() {
        let mut tenants = vec![
            tenant(Some("A"), "prod", "first"),
            tenant(Some("A"), "prod", "second"),
            tenant(Some("A"), "dev", "third"),
        ];

        sort_tenants(&mut tenants);

        assert_eq!(tenants[0].device_owner_id, "third");
        assert_eq!(tenants[1].device_owner_id, "first");
        assert_eq!(tenants[2].device_owner_id, "second");
    }

    #[test]
    fn should_sort_unnamed_tenants_before_named_ones() {
        let mut tenants = vec![
            tenant(Some("A"), "dev", "u1"),
            tenant(None, "dev", "u2"),
        ];

        sort_tenants(&mut tenants);

        assert!(tenants[0].tenant_name.is_none());
        assert_eq!(tenants[1].sort_name(), "A");
    }

    #[test]
    fn should_sort_devices_by_device_id() {
        let mut devices = vec![
            summary("dev-3", "u1"),
            summary("dev-1", "u2"),
            summary("dev-2", "u3"),
        ];

        sort_device_summaries(&mut devices);

        let ids: Vec<_> = devices.iter().map(|d| d.device_id.as_str()).collect();
        assert_eq!(ids, vec!["dev-1", "dev-2", "dev-3"]);
    }

    #[test]
    fn should_keep_upstream_order_for_duplicate_device_ids() {
        let mut devices = vec![
            summary("dev-1", "first"),
            summary("dev-0", "between"),
            summary("dev-1", "second"),
        ];

        sort_device_summaries(&mut devices);

        assert_eq!(devices[0].device_owner, "between");
        assert_eq!(devices[1].device_owner, "first");
        assert_eq!(devices[2].device_owner, "second");
    }
}
