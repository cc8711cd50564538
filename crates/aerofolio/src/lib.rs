//! Top-level facade crate for aerofolio.
//!
//! Re-exports the domain core and the server library so users can depend on a single crate.

pub mod core {
    pub use aerofolio_core::*;
}

pub mod server {
    pub use aerofolio_server::*;
}
