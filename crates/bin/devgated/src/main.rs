//! # devgated — devgate daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize the `tracing` subscriber
//! - Construct the upstream client (adapter)
//! - Construct application services, injecting the client via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use devgate_adapter_http_axum::router;
use devgate_adapter_http_axum::state::AppState;
use devgate_adapter_upstream_reqwest::UpstreamMetadataClient;
use devgate_app::services::device_service::DeviceService;
use devgate_app::services::tenant_service::TenantService;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Upstream client — shared connection pool across both services.
    let client = UpstreamMetadataClient::new(config.upstream.clone());

    // Services
    let tenant_service = TenantService::new(client.clone());
    let device_service = DeviceService::new(client);

    // HTTP
    let state = AppState::new(tenant_service, device_service);
    let app = router::build(state, &config.http);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "devgated listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
