//! Opaque aggregate passthrough tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use aerofolio_core::stats::StatsResult;

#[test]
fn preserves_exact_text() {
    // Key order and spacing must survive untouched.
    let body = r#"{"totalFlights":42,"uniqueAirports":7}"#;
    let stats = StatsResult::from_json(body).unwrap();
    assert_eq!(stats.as_json(), body);
    assert_eq!(stats.into_json(), body);
}

#[test]
fn empty_aggregate_is_valid() {
    let stats = StatsResult::from_json("{}").unwrap();
    assert_eq!(stats.as_json(), "{}");
}

#[test]
fn rejects_invalid_json() {
    let err = StatsResult::from_json("{not json").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "STATS_UNAVAILABLE");
}

#[test]
fn from_value_round_trips() {
    let v = serde_json::json!({ "routes": 3 });
    let stats = StatsResult::from_value(&v).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stats.as_json()).unwrap();
    assert_eq!(parsed, v);
}
