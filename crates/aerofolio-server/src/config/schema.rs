use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use aerofolio_core::content::{Project, SocialLink};
use aerofolio_core::error::{Result, SiteError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub site: SiteSection,

    #[serde(default)]
    pub content: ContentSection,

    #[serde(default)]
    pub social: Vec<SocialLink>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub ai: Option<AiSection>,

    #[serde(default)]
    pub stats: StatsSection,
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SiteError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.site.validate()?;

        for link in &self.social {
            link.validate()?;
        }
        for project in &self.projects {
            project.validate()?;
        }
        if let Some(ai) = &self.ai {
            ai.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|_| {
            SiteError::BadRequest(format!("server.listen must be a socket address: {}", self.listen))
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Canonical site origin, no trailing slash (e.g., "https://example.com").
    pub base_url: String,
    pub title: String,
}

impl SiteSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SiteError::BadRequest(format!(
                "site.base_url must be http(s): {}",
                self.base_url
            )));
        }
        if self.base_url.ends_with('/') {
            return Err(SiteError::BadRequest(
                "site.base_url must not end with a slash".into(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(SiteError::BadRequest("site.title must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentSection {
    #[serde(default = "default_content_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_home_page")]
    pub home: String,

    #[serde(default = "default_projects_page")]
    pub projects: String,

    #[serde(default = "default_about_page")]
    pub about: String,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
            home: default_home_page(),
            projects: default_projects_page(),
            about: default_about_page(),
        }
    }
}

fn default_content_dir() -> PathBuf {
    "content".into()
}
fn default_home_page() -> String {
    "home.html".into()
}
fn default_projects_page() -> String {
    "projects.html".into()
}
fn default_about_page() -> String {
    "about.html".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSection {
    #[serde(default = "default_airports_db")]
    pub airports_db: PathBuf,
}

impl Default for StatsSection {
    fn default() -> Self {
        Self { airports_db: default_airports_db() }
    }
}

fn default_airports_db() -> PathBuf {
    "data/flights.json".into()
}

/// OpenAI-compatible provider endpoint. The key itself never lives in the
/// config file, only the name of the environment variable that holds it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiSection {
    pub base_url: String,

    pub model: String,

    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl AiSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SiteError::BadRequest(format!(
                "ai.base_url must be http(s): {}",
                self.base_url
            )));
        }
        if self.base_url.ends_with('/') {
            return Err(SiteError::BadRequest("ai.base_url must not end with a slash".into()));
        }
        if self.model.trim().is_empty() {
            return Err(SiteError::BadRequest("ai.model must not be empty".into()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(SiteError::BadRequest("ai.api_key_env must not be empty".into()));
        }
        Ok(())
    }
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".into()
}
