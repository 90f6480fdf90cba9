use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport settings for [`crate::HttpLookupClient`].
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Per-request timeout. An expired request is a transport failure.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("bom-enrich/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl LookupConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Must be a valid header value, or building the client fails.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
