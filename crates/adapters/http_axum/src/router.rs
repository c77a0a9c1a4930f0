//! Axum router assembly.

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use devgate_app::ports::MetadataDirectory;

use crate::state::AppState;

/// Static knobs for router assembly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Path prefix the JSON API is nested under.
    pub api_base_path: String,
    /// Directory holding the single-page app's static assets.
    pub static_dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_base_path: "/api".to_string(),
            static_dir: PathBuf::from("./public"),
        }
    }
}

/// Build the top-level axum [`Router`].
///
/// Nests the JSON API under the configured base path and serves the
/// single-page app's static assets for any unmatched path, with
/// `index.html` as the client-side-routing fallback. Every route is wrapped
/// in a permissive [`CorsLayer`] and a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<D>(state: AppState<D>, config: &HttpConfig) -> Router
where
    D: MetadataDirectory + Send + Sync + 'static,
{
    let spa = ServeDir::new(&config.static_dir)
        .not_found_service(ServeFile::new(config.static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .nest(&config.api_base_path, crate::api::routes())
        .fallback_service(spa)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
