//! Opaque stats aggregate.
//!
//! The aggregate's shape is owned by the stats provider; the HTTP surface
//! re-emits exactly the JSON text the provider produced. Stored as `RawValue`
//! so no parse/serialize cycle can reorder keys or renumber values.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{Result, SiteError};

/// Provider-defined statistics aggregate, held as validated raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsResult(Box<RawValue>);

impl StatsResult {
    /// Wrap a JSON string, validating that it parses.
    pub fn from_json(s: impl Into<String>) -> Result<Self> {
        let raw = RawValue::from_string(s.into())
            .map_err(|e| SiteError::StatsUnavailable(format!("invalid stats json: {e}")))?;
        Ok(Self(raw))
    }

    /// Build from an in-memory JSON value.
    pub fn from_value(v: &serde_json::Value) -> Result<Self> {
        let raw = serde_json::value::to_raw_value(v)
            .map_err(|e| SiteError::StatsUnavailable(format!("encode stats failed: {e}")))?;
        Ok(Self(raw))
    }

    /// The exact JSON text of the aggregate.
    pub fn as_json(&self) -> &str {
        self.0.get()
    }

    /// Consume into the JSON body string.
    pub fn into_json(self) -> String {
        self.0.get().to_owned()
    }
}
