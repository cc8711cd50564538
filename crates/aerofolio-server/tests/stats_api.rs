//! Stats endpoint contract tests, driven over live HTTP.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use aerofolio_core::error::{Result, SiteError};
use aerofolio_core::stats::StatsResult;
use aerofolio_server::app_state::AppState;
use aerofolio_server::stats::StatsProvider;

struct ScriptedProvider {
    body: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Some(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            body: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsProvider for ScriptedProvider {
    async fn get_stats(&self) -> Result<StatsResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Some(b) => StatsResult::from_json(b.as_str()),
            None => Err(SiteError::StatsUnavailable("scripted failure".into())),
        }
    }
}

#[tokio::test]
async fn passthrough_exact_body() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_pages(tmp.path());
    let provider = ScriptedProvider::ok(r#"{"totalFlights":42,"uniqueAirports":7}"#);
    let state = AppState::with_provider(common::site_config(tmp.path(), ""), provider).unwrap();
    let addr = common::serve(state).await;

    let resp = reqwest::get(format!("http://{addr}/api/airports/stats"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert_eq!(resp.headers()["cache-control"], "no-store");
    let body = resp.text().await.unwrap();
    assert_eq!(body, r#"{"totalFlights":42,"uniqueAirports":7}"#);
}

#[tokio::test]
async fn empty_aggregate_passes_through() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_pages(tmp.path());
    let provider = ScriptedProvider::ok("{}");
    let state = AppState::with_provider(common::site_config(tmp.path(), ""), provider).unwrap();
    let addr = common::serve(state).await;

    let resp = reqwest::get(format!("http://{addr}/api/airports/stats"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "{}");
}

#[tokio::test]
async fn provider_invoked_per_request() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_pages(tmp.path());
    let provider = ScriptedProvider::ok(r#"{"totalFlights":1}"#);
    let state =
        AppState::with_provider(common::site_config(tmp.path(), ""), provider.clone()).unwrap();
    let addr = common::serve(state).await;

    for _ in 0..2 {
        let resp = reqwest::get(format!("http://{addr}/api/airports/stats"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }
    // No caching layer: each request must reach the provider.
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn provider_failure_is_500_with_empty_body() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_pages(tmp.path());
    let provider = ScriptedProvider::failing();
    let state =
        AppState::with_provider(common::site_config(tmp.path(), ""), provider.clone()).unwrap();
    let addr = common::serve(state).await;

    let resp = reqwest::get(format!("http://{addr}/api/airports/stats"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    assert!(resp.text().await.unwrap().is_empty());
    assert_eq!(provider.calls(), 1);
}
