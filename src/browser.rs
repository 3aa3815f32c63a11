//! Browser family resolution and session options
//!
//! Maps a configured browser name to a family plus the launch flags that
//! family needs, including the headless variants.

use serde_json::{json, Map, Value};
use std::fmt;

/// Supported browser families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFamily {
    Chrome,
    Firefox,
    Edge,
    Safari,
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserFamily::Chrome => write!(f, "chrome"),
            BrowserFamily::Firefox => write!(f, "firefox"),
            BrowserFamily::Edge => write!(f, "edge"),
            BrowserFamily::Safari => write!(f, "safari"),
        }
    }
}

impl BrowserFamily {
    /// Resolve a configured browser name to a family.
    ///
    /// Matches by substring so "chrome-headless" resolves like "chrome".
    /// Unrecognized names fall back to Chrome; the fallback is intentional,
    /// not an error, so a typo in configuration still yields a usable run.
    pub fn resolve(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if name.contains("firefox") {
            BrowserFamily::Firefox
        } else if name.contains("edge") {
            BrowserFamily::Edge
        } else if name.contains("safari") {
            BrowserFamily::Safari
        } else if name.contains("chrome") {
            BrowserFamily::Chrome
        } else {
            tracing::warn!("Unrecognized browser '{}', falling back to chrome", name);
            BrowserFamily::Chrome
        }
    }

    /// W3C capability name for this family
    pub fn browser_name(&self) -> &'static str {
        match self {
            BrowserFamily::Chrome => "chrome",
            BrowserFamily::Firefox => "firefox",
            BrowserFamily::Edge => "MicrosoftEdge",
            BrowserFamily::Safari => "safari",
        }
    }

    /// Vendor-specific options key in a W3C capabilities object
    fn options_key(&self) -> Option<&'static str> {
        match self {
            BrowserFamily::Chrome => Some("goog:chromeOptions"),
            BrowserFamily::Firefox => Some("moz:firefoxOptions"),
            BrowserFamily::Edge => Some("ms:edgeOptions"),
            // Safari has no vendor options object worth sending
            BrowserFamily::Safari => None,
        }
    }
}

/// Launch options for one browser session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Resolved browser family
    pub family: BrowserFamily,
    /// Whether the headless variant was requested
    pub headless: bool,
    /// Launch arguments passed to the browser process
    pub args: Vec<String>,
}

impl SessionOptions {
    /// Build options for a configured browser name.
    ///
    /// A name containing "headless" selects that family's headless flags.
    /// Safari has no headless variant and is passed through unmodified.
    pub fn for_browser(name: &str) -> Self {
        let family = BrowserFamily::resolve(name);
        let headless = name.to_ascii_lowercase().contains("headless");

        let args = match (family, headless) {
            (BrowserFamily::Chrome, true) => vec![
                "--headless=new".to_string(),
                "--disable-gpu".to_string(),
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
            ],
            (BrowserFamily::Firefox, true) | (BrowserFamily::Edge, true) => {
                vec!["--headless".to_string()]
            }
            // Safari ignores the headless request entirely
            (BrowserFamily::Safari, _) => vec![],
            (_, false) => vec![],
        };

        Self {
            family,
            headless: headless && family != BrowserFamily::Safari,
            args,
        }
    }

    /// Render a W3C-style capabilities object for providers that speak
    /// WebDriver capabilities.
    pub fn to_capabilities(&self) -> Map<String, Value> {
        let mut caps = Map::new();
        caps.insert(
            "browserName".to_string(),
            Value::String(self.family.browser_name().to_string()),
        );

        if let Some(key) = self.family.options_key() {
            caps.insert(key.to_string(), json!({ "args": self.args }));
        }

        caps
    }
}
