//! Static site records (config-level data model).
//!
//! These are plain configuration values: deserialized once at process start,
//! validated, then shared immutably for the process lifetime.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// One social link shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Display label (e.g., "GitHub").
    pub label: String,
    /// Target URI.
    pub link: String,
    /// Whether the link appears in the page header.
    #[serde(default)]
    pub show_header: bool,
}

impl SocialLink {
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(SiteError::BadRequest("social link label must not be empty".into()));
        }
        if !is_supported_uri(&self.link) {
            return Err(SiteError::BadRequest(format!(
                "social link {} must be http(s) or mailto: {}",
                self.label, self.link
            )));
        }
        Ok(())
    }
}

/// One portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Optional external link (repo or live deployment).
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SiteError::BadRequest("project name must not be empty".into()));
        }
        if let Some(link) = &self.link {
            if !is_supported_uri(link) {
                return Err(SiteError::BadRequest(format!(
                    "project {} link must be http(s) or mailto: {link}",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

fn is_supported_uri(s: &str) -> bool {
    s.starts_with("https://") || s.starts_with("http://") || s.starts_with("mailto:")
}
