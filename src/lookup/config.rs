use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://congress.api.sunlightfoundation.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the legislator directory, built once and passed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
