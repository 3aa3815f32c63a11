//! Mock session implementations for testing
//!
//! Recording provider and session handles used by unit and integration
//! tests; no real browser is launched.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use url::Url;
use uuid::Uuid;

use crate::browser::{BrowserFamily, SessionOptions};
use crate::session::traits::{SessionHandle, SessionProvider};
use crate::Error;

/// Record of one provider open call
#[derive(Debug, Clone)]
pub struct OpenCall {
    pub remote: bool,
    pub family: BrowserFamily,
    pub headless: bool,
    pub args: Vec<String>,
    pub hub: Option<Url>,
}

/// Mock session provider that records every open call
#[derive(Default)]
pub struct MockSessionProvider {
    calls: RwLock<Vec<OpenCall>>,
    sessions: RwLock<Vec<Arc<MockSession>>>,
    fail_next: AtomicBool,
}

impl MockSessionProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next open call fail with a session error
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// All open calls recorded so far
    pub async fn calls(&self) -> Vec<OpenCall> {
        self.calls.read().await.clone()
    }

    /// Number of open calls recorded so far
    pub async fn open_count(&self) -> usize {
        self.calls.read().await.len()
    }

    /// Concrete sessions opened so far, in creation order
    pub async fn sessions(&self) -> Vec<Arc<MockSession>> {
        self.sessions.read().await.clone()
    }

    async fn open(
        &self,
        remote: bool,
        hub: Option<&Url>,
        options: &SessionOptions,
    ) -> Result<Arc<dyn SessionHandle>, Error> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(Error::session("Injected open failure"));
        }

        self.calls.write().await.push(OpenCall {
            remote,
            family: options.family,
            headless: options.headless,
            args: options.args.clone(),
            hub: hub.cloned(),
        });

        let session = Arc::new(MockSession::new(options.family));
        self.sessions.write().await.push(session.clone());
        Ok(session)
    }
}

#[async_trait]
impl SessionProvider for MockSessionProvider {
    async fn open_local(
        &self,
        options: &SessionOptions,
    ) -> Result<Arc<dyn SessionHandle>, Error> {
        self.open(false, None, options).await
    }

    async fn open_remote(
        &self,
        hub: &Url,
        options: &SessionOptions,
    ) -> Result<Arc<dyn SessionHandle>, Error> {
        self.open(true, Some(hub), options).await
    }
}

/// Mock session handle that records lifecycle calls
#[derive(Debug)]
pub struct MockSession {
    id: String,
    family: BrowserFamily,
    maximized: AtomicBool,
    implicit_wait: RwLock<Option<Duration>>,
    terminate_count: AtomicUsize,
    is_active: AtomicBool,
}

impl MockSession {
    /// Create a new mock session
    pub fn new(family: BrowserFamily) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            family,
            maximized: AtomicBool::new(false),
            implicit_wait: RwLock::new(None),
            terminate_count: AtomicUsize::new(0),
            is_active: AtomicBool::new(true),
        }
    }

    /// Whether maximize was called
    pub fn maximized(&self) -> bool {
        self.maximized.load(Ordering::SeqCst)
    }

    /// The implicit wait the registry configured, if any
    pub async fn implicit_wait(&self) -> Option<Duration> {
        *self.implicit_wait.read().await
    }

    /// How many times terminate was called
    pub fn terminate_count(&self) -> usize {
        self.terminate_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionHandle for MockSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn family(&self) -> BrowserFamily {
        self.family
    }

    async fn maximize(&self) -> Result<(), Error> {
        self.maximized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn set_implicit_wait(&self, wait: Duration) -> Result<(), Error> {
        *self.implicit_wait.write().await = Some(wait);
        Ok(())
    }

    async fn terminate(&self) -> Result<(), Error> {
        self.terminate_count.fetch_add(1, Ordering::SeqCst);
        self.is_active.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.is_active.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_session_lifecycle() {
        let session = MockSession::new(BrowserFamily::Chrome);

        assert!(!session.id().is_empty());
        assert!(session.is_active());
        assert!(!session.maximized());

        session.maximize().await.unwrap();
        session
            .set_implicit_wait(Duration::from_secs(15))
            .await
            .unwrap();
        assert!(session.maximized());
        assert_eq!(session.implicit_wait().await, Some(Duration::from_secs(15)));

        session.terminate().await.unwrap();
        assert!(!session.is_active());
        assert_eq!(session.terminate_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_records_calls() {
        let provider = MockSessionProvider::new();
        let options = SessionOptions::for_browser("firefox-headless");

        provider.open_local(&options).await.unwrap();

        let hub = Url::parse("http://localhost:4444/wd/hub").unwrap();
        provider.open_remote(&hub, &options).await.unwrap();

        let calls = provider.calls().await;
        assert_eq!(calls.len(), 2);
        assert!(!calls[0].remote);
        assert!(calls[1].remote);
        assert_eq!(calls[1].family, BrowserFamily::Firefox);
        assert!(calls[1].headless);
        assert_eq!(calls[1].hub.as_ref().unwrap().as_str(), hub.as_str());
    }

    #[tokio::test]
    async fn test_mock_provider_injected_failure() {
        let provider = MockSessionProvider::new();
        provider.fail_next();

        let options = SessionOptions::for_browser("chrome");
        let result = provider.open_local(&options).await;
        assert!(matches!(result.unwrap_err(), Error::Session(_)));

        // Only the next call fails
        assert!(provider.open_local(&options).await.is_ok());
    }
}
