//! Gridpool: per-worker browser session pool for end-to-end UI test suites
//!
//! This library hands each concurrently executing test worker at most one
//! browser session, created lazily from run configuration (local process or
//! remote WebDriver hub) and torn down on demand.

pub mod error;
pub mod config;

pub mod browser;
pub mod params;
pub mod session;

// Re-exports
pub use error::{Error, Result};

/// Gridpool library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
