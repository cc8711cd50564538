//! OpenAI-compatible provider configuration.
//!
//! Resolved once at startup; no request path issues AI calls. The key is
//! read from the environment variable named in config and never written
//! back out (Debug redacts it).

use std::fmt;

use aerofolio_core::error::{Result, SiteError};

use crate::config::AiSection;

#[derive(Clone)]
pub struct AiClientConfig {
    base_url: String,
    model: String,
    api_key: String,
}

impl AiClientConfig {
    /// Resolve the config section against the process environment.
    pub fn from_section(section: &AiSection) -> Result<Self> {
        let api_key = std::env::var(&section.api_key_env).map_err(|_| {
            SiteError::BadRequest(format!(
                "ai key env var {} is not set",
                section.api_key_env
            ))
        })?;
        if api_key.trim().is_empty() {
            return Err(SiteError::BadRequest(format!(
                "ai key env var {} is empty",
                section.api_key_env
            )));
        }

        Ok(Self {
            base_url: section.base_url.clone(),
            model: section.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Chat-completions endpoint under the configured base URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Authorization header value for outbound requests.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl fmt::Debug for AiClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
