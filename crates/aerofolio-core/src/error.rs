//! Shared error type across aerofolio crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration or content.
    BadRequest,
    /// No such route or page.
    NotFound,
    /// Stats provider could not produce an aggregate.
    StatsUnavailable,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::StatsUnavailable => "STATS_UNAVAILABLE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("stats unavailable: {0}")]
    StatsUnavailable(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SiteError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SiteError::BadRequest(_) => ClientCode::BadRequest,
            SiteError::NotFound => ClientCode::NotFound,
            SiteError::StatsUnavailable(_) => ClientCode::StatsUnavailable,
            SiteError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SiteError::Internal(_) => ClientCode::Internal,
        }
    }
}
