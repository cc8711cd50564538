//! Shared application state for the aerofolio server.
//!
//! Everything here is built once at startup and immutable afterwards; the
//! only runtime mutation is metric counters.

use std::sync::Arc;

use aerofolio_core::content::{Project, SocialLink};
use aerofolio_core::error::{Result, SiteError};

use crate::ai::AiClientConfig;
use crate::config::SiteConfig;
use crate::obs::SiteMetrics;
use crate::stats::{AirportsDb, StatsProvider};

const TITLE_MARKER: &str = "<!--title-->";
const LINKS_MARKER: &str = "<!--links-->";
const PROJECTS_MARKER: &str = "<!--projects-->";

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    provider: Arc<dyn StatsProvider>,
    metrics: Arc<SiteMetrics>,
}

struct AppStateInner {
    cfg: SiteConfig,
    pages: Pages,
    ai: Option<AiClientConfig>,
}

/// Page bodies, loaded and marker-substituted once at startup.
pub struct Pages {
    pub home: String,
    pub projects: String,
    pub about: String,
}

impl AppState {
    /// Build application state with the default file-backed stats provider.
    pub fn new(cfg: SiteConfig) -> Result<Self> {
        let provider = Arc::new(AirportsDb::new(cfg.stats.airports_db.clone()));
        Self::with_provider(cfg, provider)
    }

    /// Build application state around an explicit stats provider.
    pub fn with_provider(cfg: SiteConfig, provider: Arc<dyn StatsProvider>) -> Result<Self> {
        let pages = load_pages(&cfg)?;

        let ai = cfg.ai.as_ref().map(AiClientConfig::from_section).transpose()?;
        if let Some(ai) = &ai {
            tracing::info!(model = %ai.model(), "ai provider configured");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, pages, ai }),
            provider,
            metrics: Arc::new(SiteMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &SiteConfig {
        &self.inner.cfg
    }

    pub fn pages(&self) -> &Pages {
        &self.inner.pages
    }

    pub fn ai(&self) -> Option<&AiClientConfig> {
        self.inner.ai.as_ref()
    }

    pub fn provider(&self) -> Arc<dyn StatsProvider> {
        Arc::clone(&self.provider)
    }

    pub fn metrics(&self) -> &SiteMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}

fn load_pages(cfg: &SiteConfig) -> Result<Pages> {
    let read = |name: &str| -> Result<String> {
        let path = cfg.content.dir.join(name);
        std::fs::read_to_string(&path)
            .map_err(|e| SiteError::BadRequest(format!("read page {} failed: {e}", path.display())))
    };

    Ok(Pages {
        home: substitute(read(&cfg.content.home)?, cfg),
        projects: substitute(read(&cfg.content.projects)?, cfg),
        about: substitute(read(&cfg.content.about)?, cfg),
    })
}

/// Replace the content markers with config-derived fragments. This runs once
/// per page at startup; served bodies are fixed afterwards.
fn substitute(page: String, cfg: &SiteConfig) -> String {
    let mut page = page;
    if page.contains(TITLE_MARKER) {
        page = page.replace(TITLE_MARKER, &cfg.site.title);
    }
    if page.contains(LINKS_MARKER) {
        page = page.replace(LINKS_MARKER, &header_links_fragment(&cfg.social));
    }
    if page.contains(PROJECTS_MARKER) {
        page = page.replace(PROJECTS_MARKER, &project_list_fragment(&cfg.projects));
    }
    page
}

fn header_links_fragment(social: &[SocialLink]) -> String {
    social
        .iter()
        .filter(|l| l.show_header)
        .map(|l| format!("<a href=\"{}\">{}</a>", l.link, l.label))
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_list_fragment(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|p| {
            let name = match &p.link {
                Some(link) => format!("<a href=\"{link}\">{}</a>", p.name),
                None => p.name.clone(),
            };
            if p.description.is_empty() {
                format!("<li>{name}</li>")
            } else {
                format!("<li>{name}: {}</li>", p.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
