//! Driver registry
//!
//! Hands each test worker at most one browser session: created lazily on
//! first acquire, reused for every later acquire from the same worker, and
//! torn down exactly once on release.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::browser::SessionOptions;
use crate::config::{Config, RunMode, CROSS_BROWSER};
use crate::params::{NoParams, TestParams};
use crate::session::traits::{SessionHandle, SessionProvider, WorkerId};
use crate::{Error, Result};

/// Per-worker session registry
pub struct DriverRegistry {
    config: Config,
    provider: Arc<dyn SessionProvider>,
    params: Arc<dyn TestParams>,
    slots: RwLock<HashMap<WorkerId, Arc<dyn SessionHandle>>>,
    // Serializes the whole read-resolve-create sequence across workers
    create_lock: tokio::sync::Mutex<()>,
}

impl DriverRegistry {
    /// Create a new registry over a session provider
    pub fn new(config: Config, provider: Arc<dyn SessionProvider>) -> Self {
        Self::with_params(config, provider, Arc::new(NoParams))
    }

    /// Create a registry with a test parameter source for cross-browser runs
    pub fn with_params(
        config: Config,
        provider: Arc<dyn SessionProvider>,
        params: Arc<dyn TestParams>,
    ) -> Self {
        Self {
            config,
            provider,
            params,
            slots: RwLock::new(HashMap::new()),
            create_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Create a registry backed by the mock provider, for testing
    pub fn mock(config: Config) -> Self {
        Self::new(config, Arc::new(crate::session::mock::MockSessionProvider::new()))
    }

    /// Get the worker's session, opening one if its slot is empty.
    ///
    /// Creation runs under a single lock shared across all workers, so
    /// concurrent first acquires serialize while a session is constructed.
    /// Storage itself is partitioned per worker.
    #[instrument(skip(self))]
    pub async fn acquire(&self, worker: &WorkerId) -> Result<Arc<dyn SessionHandle>> {
        let _guard = self.create_lock.lock().await;

        if let Some(handle) = self.slot(worker)? {
            debug!("Reusing session {} for worker {}", handle.id(), worker);
            return Ok(handle);
        }

        let browser = self.resolve_browser()?;
        let options = SessionOptions::for_browser(&browser);

        let handle = match self.config.run_mode {
            RunMode::Remote => {
                let hub = self.hub_url()?;
                info!(
                    "Opening remote {} session at {} for worker {}",
                    options.family, hub, worker
                );
                self.provider.open_remote(&hub, &options).await?
            }
            RunMode::Local => {
                info!(
                    "Opening local {} session for worker {}",
                    options.family, worker
                );
                self.provider.open_local(&options).await?
            }
        };

        handle.maximize().await?;
        handle
            .set_implicit_wait(Duration::from_secs(self.config.implicit_wait_secs))
            .await?;

        self.slots
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .insert(worker.clone(), handle.clone());

        Ok(handle)
    }

    /// Terminate the worker's session and clear its slot.
    ///
    /// A worker with no open session is a no-op, not an error, so teardown
    /// hooks may call this unconditionally.
    #[instrument(skip(self))]
    pub async fn release(&self, worker: &WorkerId) -> Result<()> {
        let handle = self
            .slots
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .remove(worker);

        if let Some(handle) = handle {
            debug!("Terminating session {} for worker {}", handle.id(), worker);
            handle.terminate().await?;
        }

        Ok(())
    }

    /// Terminate every live session and clear all slots (suite teardown)
    pub async fn release_all(&self) -> Result<()> {
        let handles: Vec<(WorkerId, Arc<dyn SessionHandle>)> = self
            .slots
            .write()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .drain()
            .collect();
        // Lock guard dropped here

        for (worker, handle) in handles {
            if let Err(e) = handle.terminate().await {
                warn!("Failed to terminate session for worker {}: {}", worker, e);
            }
        }

        Ok(())
    }

    /// Number of workers currently holding a session
    pub fn session_count(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    fn slot(&self, worker: &WorkerId) -> Result<Option<Arc<dyn SessionHandle>>> {
        Ok(self
            .slots
            .read()
            .map_err(|e| Error::internal(format!("Lock error: {}", e)))?
            .get(worker)
            .cloned())
    }

    /// Effective browser for the next session: in cross-browser mode the
    /// currently executing test's parameter wins, otherwise the configured
    /// value is used directly.
    fn resolve_browser(&self) -> Result<String> {
        if self.config.browser.eq_ignore_ascii_case(CROSS_BROWSER) {
            self.params.browser().ok_or_else(|| {
                Error::configuration(
                    "Cross-browser mode requires a test-level browser parameter",
                )
            })
        } else {
            Ok(self.config.browser.clone())
        }
    }

    fn hub_url(&self) -> Result<Url> {
        let raw = self
            .config
            .hub_url
            .as_deref()
            .ok_or_else(|| Error::configuration("hubURL is required in remote mode"))?;

        Url::parse(raw).map_err(|source| Error::InvalidHubUrl {
            url: raw.to_string(),
            source,
        })
    }
}
