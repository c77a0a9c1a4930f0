//! # devgate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound
//!   port): [`ports::MetadataDirectory`] — the upstream tenant/device
//!   metadata directory
//! - Define **driving/inbound ports** as use-case structs:
//!   [`services::tenant_service::TenantService`] and
//!   [`services::device_service::DeviceService`] — fetch, order, forward
//! - Orchestrate domain objects without knowing *how* the upstream IO works
//!
//! ## Dependency rule
//! Depends on `devgate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
