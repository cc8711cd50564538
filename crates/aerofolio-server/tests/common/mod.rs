//! Shared helpers for server integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use aerofolio_server::app_state::AppState;
use aerofolio_server::config::{self, SiteConfig};
use aerofolio_server::router::build_router;

pub fn write_pages(dir: &Path) {
    std::fs::write(
        dir.join("home.html"),
        "<html><head><title><!--title--></title></head><body><nav><!--links--></nav>home</body></html>",
    )
    .unwrap();
    std::fs::write(
        dir.join("projects.html"),
        "<html><body><ul><!--projects--></ul></body></html>",
    )
    .unwrap();
    std::fs::write(dir.join("about.html"), "<html><body>about</body></html>").unwrap();
}

/// Minimal valid config rooted at `content_dir`; `extra` appends further
/// top-level YAML sections.
pub fn site_config(content_dir: &Path, extra: &str) -> SiteConfig {
    let yaml = format!(
        r#"
version: 1
site:
  base_url: "https://example.com"
  title: "Example"
content:
  dir: "{}"
{extra}"#,
        content_dir.display()
    );
    config::load_from_str(&yaml).unwrap()
}

/// Bind an ephemeral port, serve the router in a background task, return the
/// bound address.
pub async fn serve(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
