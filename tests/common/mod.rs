//! Common test utilities
//!
//! Shared fixtures for the integration tests: registries wired to the mock
//! session provider under various run configurations.

use gridpool::config::{Config, RunMode};
use gridpool::params::StaticParams;
use gridpool::session::{DriverRegistry, MockSessionProvider};
use std::sync::Arc;

/// Registry for a local run with the given browser name
pub fn local_registry(browser: &str) -> (Arc<MockSessionProvider>, DriverRegistry) {
    let provider = Arc::new(MockSessionProvider::new());
    let config = Config {
        browser: browser.to_string(),
        ..Config::default()
    };
    let registry = DriverRegistry::new(config, provider.clone());
    (provider, registry)
}

/// Registry for a remote run against the given hub URL
pub fn remote_registry(
    browser: &str,
    hub_url: &str,
) -> (Arc<MockSessionProvider>, DriverRegistry) {
    let provider = Arc::new(MockSessionProvider::new());
    let config = Config {
        browser: browser.to_string(),
        run_mode: RunMode::Remote,
        hub_url: Some(hub_url.to_string()),
        ..Config::default()
    };
    let registry = DriverRegistry::new(config, provider.clone());
    (provider, registry)
}

/// Registry in cross-browser mode with a fixed test-level parameter
pub fn cross_browser_registry(
    test_browser: &str,
) -> (Arc<MockSessionProvider>, DriverRegistry) {
    let provider = Arc::new(MockSessionProvider::new());
    let config = Config {
        browser: "crossbrowser".to_string(),
        ..Config::default()
    };
    let registry = DriverRegistry::with_params(
        config,
        provider.clone(),
        Arc::new(StaticParams::new(test_browser)),
    );
    (provider, registry)
}
