//! # devgate-domain
//!
//! Pure domain model for the devgate metadata gateway.
//!
//! ## Responsibilities
//! - Value objects mirroring the upstream wire format: [`tenant::Tenant`],
//!   [`device::DeviceSummary`], [`device::DeviceRegistration`]
//! - Deterministic ordering of list payloads ([`ordering`])
//! - The error taxonomy shared across the workspace ([`error`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
pub mod ordering;
pub mod tenant;
