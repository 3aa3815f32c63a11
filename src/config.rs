//! Run configuration for Gridpool
//!
//! Immutable-for-the-run values: which browser to open, whether sessions run
//! against a local process or a remote hub, and the hub endpoint.

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Browser name that requests a per-test override from the test runner.
pub const CROSS_BROWSER: &str = "crossbrowser";

fn default_implicit_wait() -> u64 {
    15
}

/// Where sessions are opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum RunMode {
    #[default]
    Local,
    Remote,
}

impl From<String> for RunMode {
    fn from(value: String) -> Self {
        RunMode::parse(&value)
    }
}

impl RunMode {
    /// "docker" and "remote" select the hub; any other value means local.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "docker" | "remote" => RunMode::Remote,
            _ => RunMode::Local,
        }
    }
}

/// Run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Browser to open: a family name, the name plus "headless"
    /// (e.g. "chrome-headless"), or "crossbrowser"
    pub browser: String,

    /// Local process or remote hub
    #[serde(default, alias = "runMode")]
    pub run_mode: RunMode,

    /// Remote hub endpoint, required only in remote mode
    #[serde(default, alias = "hubURL")]
    pub hub_url: Option<String>,

    /// Implicit wait bound applied to each new session, in seconds
    #[serde(default = "default_implicit_wait")]
    pub implicit_wait_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser: "chrome".to_string(),
            run_mode: RunMode::Local,
            hub_url: None,
            implicit_wait_secs: default_implicit_wait(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let browser = env::var("GRIDPOOL_BROWSER")
            .map_err(|_| Error::configuration("GRIDPOOL_BROWSER is not set"))?;

        let mut config = Config {
            browser,
            ..Config::default()
        };

        if let Ok(run_mode) = env::var("GRIDPOOL_RUN_MODE") {
            config.run_mode = RunMode::parse(&run_mode);
        }

        if let Ok(hub_url) = env::var("GRIDPOOL_HUB_URL") {
            config.hub_url = Some(hub_url);
        }

        if let Ok(wait) = env::var("GRIDPOOL_IMPLICIT_WAIT") {
            config.implicit_wait_secs = wait
                .parse()
                .map_err(|_| Error::configuration("Invalid GRIDPOOL_IMPLICIT_WAIT"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations no session could ever be built from
    pub fn validate(&self) -> Result<()> {
        if self.browser.trim().is_empty() {
            return Err(Error::configuration("browser must not be empty"));
        }
        Ok(())
    }
}
