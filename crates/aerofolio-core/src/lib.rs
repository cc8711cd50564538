//! aerofolio core: domain records, the opaque stats aggregate, and error types.
//!
//! This crate defines the site's configuration-level data model and the error
//! surface shared by the server and tooling. It intentionally carries no
//! transport or runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SiteError`/`Result` so the serving
//! process does not crash on malformed configuration or bad data.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod content;
pub mod error;
pub mod stats;

/// Shared result type.
pub use error::{Result, SiteError};
