//! Robots and sitemap metadata.
//!
//! Both documents are derived from `site.base_url` at request time; they are
//! cheap string builds with no I/O.

use std::fmt::Write;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

const SITE_PATHS: [&str; 3] = ["/", "/projects", "/about"];

pub async fn robots(State(app): State<AppState>) -> Response {
    app.metrics().http_requests.inc(&[("route", "robots")]);
    let base = &app.cfg().site.base_url;
    let body = format!(
        "User-agent: *\nAllow: /\nAllow: /api/og/\nDisallow: /private/\n\nSitemap: {base}/sitemap.xml\n"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn sitemap(State(app): State<AppState>) -> Response {
    app.metrics().http_requests.inc(&[("route", "sitemap")]);
    let base = &app.cfg().site.base_url;

    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in SITE_PATHS {
        let _ = writeln!(body, "  <url><loc>{base}{path}</loc></url>");
    }
    body.push_str("</urlset>\n");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        body,
    )
        .into_response()
}
