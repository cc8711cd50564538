//! Minimal metrics registry for the site.
//!
//! Counter families with dynamic labels, keyed by the rendered label set so
//! exposition needs no re-formatting. Scalar state (draining) is a plain
//! atomic flag.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Render labels into the stable `k="v",...` form used as the family key.
fn render_labels(labels: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(&str, &str)> = labels.to_vec();
    pairs.sort();
    pairs
        .iter()
        .map(|(k, v)| format!("{k}=\"{}\"", escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Counter family with dynamic labels.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<String, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let key = render_labels(labels);
        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            if r.key().is_empty() {
                let _ = writeln!(out, "{name} {val}");
            } else {
                let _ = writeln!(out, "{name}{{{}}} {val}", r.key());
            }
        }
    }
}

#[derive(Default)]
pub struct SiteMetrics {
    pub http_requests: CounterVec,
    pub stats_requests: CounterVec,
    pub provider_errors: CounterVec,
    draining: AtomicBool,
}

impl SiteMetrics {
    /// Mark draining state.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }

    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render("aerofolio_http_requests_total", &mut out);
        self.stats_requests.render("aerofolio_stats_requests_total", &mut out);
        self.provider_errors.render("aerofolio_provider_errors_total", &mut out);
        let _ = writeln!(
            out,
            "# TYPE aerofolio_draining gauge\naerofolio_draining {}",
            if self.is_draining() { 1 } else { 0 }
        );
        out
    }
}
