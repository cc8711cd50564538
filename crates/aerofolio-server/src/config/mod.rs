//! Site config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use aerofolio_core::error::{Result, SiteError};

pub use schema::{AiSection, ContentSection, ServerSection, SiteConfig, SiteSection, StatsSection};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| SiteError::Internal(format!("read config {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<SiteConfig> {
    let cfg: SiteConfig = serde_yaml::from_str(s)
        .map_err(|e| SiteError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
