//! Session traits
//!
//! Abstract interfaces between the registry and whatever actually opens
//! browsers: a session handle, the provider that creates one, and the
//! worker identity sessions are cached against.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::browser::{BrowserFamily, SessionOptions};

/// Identity of one concurrently executing test worker.
///
/// Sessions are cached per worker, never shared across workers. Any string
/// works as an identity; harnesses that run one test per OS thread can use
/// [`WorkerId::current`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Derive an identity from the calling OS thread
    pub fn current() -> Self {
        Self(format!("{:?}", std::thread::current().id()))
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One open browser session.
///
/// An opaque capability handle: the registry only maximizes it, sets its
/// implicit wait, and eventually terminates it. Navigation and inspection
/// belong to the wrapped automation library, not this crate.
#[async_trait]
pub trait SessionHandle: Send + Sync + fmt::Debug {
    /// Session ID
    fn id(&self) -> &str;

    /// Browser family this session runs
    fn family(&self) -> BrowserFamily;

    /// Maximize the viewport
    async fn maximize(&self) -> Result<(), crate::Error>;

    /// Set the implicit wait bound for element lookups
    async fn set_implicit_wait(&self, wait: Duration) -> Result<(), crate::Error>;

    /// Terminate the underlying session
    async fn terminate(&self) -> Result<(), crate::Error>;

    /// Check if the session is still open
    fn is_active(&self) -> bool;
}

/// Opens browser sessions, locally or against a remote hub
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Open a local in-process browser session
    async fn open_local(&self, options: &SessionOptions)
        -> Result<Arc<dyn SessionHandle>, crate::Error>;

    /// Open a session on a remote hub
    async fn open_remote(
        &self,
        hub: &Url,
        options: &SessionOptions,
    ) -> Result<Arc<dyn SessionHandle>, crate::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_id_equality() {
        assert_eq!(WorkerId::from("w1"), WorkerId::new("w1"));
        assert_ne!(WorkerId::from("w1"), WorkerId::from("w2"));
    }

    #[test]
    fn test_worker_id_current_is_stable_within_thread() {
        assert_eq!(WorkerId::current(), WorkerId::current());
    }
}
