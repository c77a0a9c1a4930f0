//! # devgate-adapter-upstream-reqwest
//!
//! Upstream client adapter using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`MetadataDirectory`](devgate_app::ports::MetadataDirectory)
//!   port against the cloud tenant/device metadata directory
//! - Build upstream URLs from the configured base origin and environment id
//! - Map transport and decode failures into the domain error taxonomy
//!
//! ## Dependency rule
//! Depends on `devgate-app` (for the port trait) and `devgate-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::UpstreamMetadataClient;
pub use config::UpstreamConfig;
