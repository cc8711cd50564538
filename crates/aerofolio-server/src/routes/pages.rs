//! Static page handlers.
//!
//! Bodies are preloaded into `AppState`; handlers only clone and count.

use axum::extract::State;
use axum::response::Html;

use crate::app_state::AppState;

pub async fn home(State(app): State<AppState>) -> Html<String> {
    app.metrics().http_requests.inc(&[("route", "home")]);
    Html(app.pages().home.clone())
}

pub async fn projects(State(app): State<AppState>) -> Html<String> {
    app.metrics().http_requests.inc(&[("route", "projects")]);
    Html(app.pages().projects.clone())
}

pub async fn about(State(app): State<AppState>) -> Html<String> {
    app.metrics().http_requests.inc(&[("route", "about")]);
    Html(app.pages().about.clone())
}
