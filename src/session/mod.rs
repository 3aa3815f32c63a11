//! # Session layer
//!
//! Owns the lifetime of browser sessions: each test worker gets at most one
//! session, created lazily from run configuration and released on demand.
//!
//! ## Core concepts
//! - **WorkerId**: explicit identity of one test worker; sessions are cached
//!   against it, never shared across workers
//! - **SessionHandle**: one open browser session (maximize, implicit wait,
//!   terminate)
//! - **SessionProvider**: opens sessions locally or against a remote hub
//! - **DriverRegistry**: the per-worker slot table and create lock
//!
//! ## Module structure
//! - `traits`: session trait definitions and worker identity
//! - `registry`: the driver registry implementation
//! - `mock`: mock implementations for testing
//!
//! ## Usage
//! ```rust,no_run
//! use gridpool::config::Config;
//! use gridpool::session::{DriverRegistry, WorkerId};
//!
//! # async fn example() -> Result<(), gridpool::Error> {
//! let registry = DriverRegistry::mock(Config::default());
//! let worker = WorkerId::current();
//!
//! // First acquire opens the session, later ones return the cached handle
//! let session = registry.acquire(&worker).await?;
//! assert!(session.is_active());
//!
//! // Teardown: terminate the session and clear the worker's slot
//! registry.release(&worker).await?;
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod registry;
pub mod mock;

pub use traits::{SessionHandle, SessionProvider, WorkerId};

// Re-export implementation structs
pub use registry::DriverRegistry;

// Re-export mock implementations for testing
pub use mock::{MockSession, MockSessionProvider};
