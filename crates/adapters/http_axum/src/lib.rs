//! # devgate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under a configurable base path
//!   (`/api/tenant`, `/api/tenant/{tenant}/device`, …)
//! - Serve the **single-page app's static assets** for any unmatched path,
//!   with `index.html` as the client-side-routing fallback
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `devgate-app` (for the port trait and services) and
//! `devgate-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
