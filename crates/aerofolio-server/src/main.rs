//! aerofolio — personal site server.
//!
//! - Static pages (`/`, `/projects`, `/about`) from the content directory
//! - `/api/airports/stats`: live flight statistics, never cached
//! - robots/sitemap metadata derived from the configured base URL
//! - `/healthz`, `/readyz`, `/metrics` for operations

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use aerofolio_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "aerofolio.yaml".into());
    let cfg = config::load_from_file(&cfg_path).expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "aerofolio starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("server failed");
}

async fn shutdown_signal(state: app_state::AppState) {
    tokio::signal::ctrl_c()
        .await
        .expect("install ctrl-c handler failed");
    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}
