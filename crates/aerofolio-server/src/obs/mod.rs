//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics behind `DashMap` label families and
//! rendered by the `/metrics` handler.

pub mod metrics;

pub use metrics::SiteMetrics;
