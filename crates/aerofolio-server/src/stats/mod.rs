//! Stats provider seam.
//!
//! The HTTP surface treats the aggregate as opaque; this trait is the
//! boundary behind which the real database helper (or a scripted test
//! double) lives.

pub mod airports;

use async_trait::async_trait;

use aerofolio_core::stats::StatsResult;
use aerofolio_core::Result;

pub use airports::AirportsDb;

#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Compute the current aggregate. Called once per request; implementations
    /// must not memoize.
    async fn get_stats(&self) -> Result<StatsResult>;
}
