//! Axum router wiring.
//!
//! Site pages, config-derived metadata, the stats API, and operational
//! endpoints share one router and one `AppState`.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::home))
        .route("/projects", get(routes::pages::projects))
        .route("/about", get(routes::pages::about))
        .route("/api/airports/stats", get(routes::stats::airport_stats))
        .route("/robots.txt", get(routes::meta::robots))
        .route("/sitemap.xml", get(routes::meta::sitemap))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .fallback(routes::fallback)
        .with_state(state)
}
