//! Test parameter source
//!
//! When configuration selects cross-browser mode, the browser to open comes
//! from the currently executing test's declared parameter instead of the
//! run-wide value. The test runner supplies that parameter through this trait.

/// Per-test parameter lookup
pub trait TestParams: Send + Sync {
    /// The current test's declared browser, if it declared one
    fn browser(&self) -> Option<String>;
}

/// Parameter source for runs without per-test parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl TestParams for NoParams {
    fn browser(&self) -> Option<String> {
        None
    }
}

/// Fixed parameter value, for harness wiring and tests
#[derive(Debug, Clone)]
pub struct StaticParams {
    browser: String,
}

impl StaticParams {
    pub fn new<S: Into<String>>(browser: S) -> Self {
        Self {
            browser: browser.into(),
        }
    }
}

impl TestParams for StaticParams {
    fn browser(&self) -> Option<String> {
        Some(self.browser.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params() {
        assert_eq!(NoParams.browser(), None);
    }

    #[test]
    fn test_static_params() {
        let params = StaticParams::new("firefox");
        assert_eq!(params.browser().as_deref(), Some("firefox"));
    }
}
