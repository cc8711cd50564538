//! File-backed airports stats provider.
//!
//! Reads the flights snapshot on every call so the aggregate always reflects
//! the file currently on disk.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use aerofolio_core::error::{Result, SiteError};
use aerofolio_core::stats::StatsResult;

use super::StatsProvider;

/// One row of the flights snapshot.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub date: Option<String>,
}

pub struct AirportsDb {
    path: PathBuf,
}

impl AirportsDb {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn aggregate(flights: &[FlightRecord]) -> Result<StatsResult> {
        let mut airports = HashSet::new();
        let mut routes = HashSet::new();
        for f in flights {
            airports.insert(f.origin.as_str());
            airports.insert(f.destination.as_str());
            routes.insert((f.origin.as_str(), f.destination.as_str()));
        }
        StatsResult::from_value(&json!({
            "totalFlights": flights.len(),
            "uniqueAirports": airports.len(),
            "routes": routes.len(),
        }))
    }
}

#[async_trait]
impl StatsProvider for AirportsDb {
    async fn get_stats(&self) -> Result<StatsResult> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SiteError::StatsUnavailable(format!("read {} failed: {e}", self.path.display()))
        })?;
        let flights: Vec<FlightRecord> = serde_json::from_str(&raw)
            .map_err(|e| SiteError::StatsUnavailable(format!("invalid flights snapshot: {e}")))?;
        Self::aggregate(&flights)
    }
}
