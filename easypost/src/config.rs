use std::time::Duration;

use crate::error::{EasyPostError, Result};

/// Production API root. Resource paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://api.easypost.com/v2/";

/// Configuration for the EasyPost client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent as the basic-auth username on every request.
    pub api_key: String,
    /// Base URL for the REST API (e.g. `https://api.easypost.com/v2/`).
    pub base_url: String,
    /// Timeout applied to calls whose context sets none.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(60)),
            user_agent: format!("easypost-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Read configuration from the process environment.
    ///
    /// - `EASYPOST_API_KEY` (required)
    /// - `EASYPOST_API_URL` (optional, defaults to [`DEFAULT_BASE_URL`])
    /// - `EASYPOST_TIMEOUT_SECS` (optional, `0` disables the default timeout)
    ///
    /// # Errors
    ///
    /// Returns `EasyPostError::Config` if the key is missing or the timeout is
    /// not an integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("EASYPOST_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EasyPostError::Config("EASYPOST_API_KEY is not set".into()))?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup("EASYPOST_API_URL").filter(|u| !u.is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup("EASYPOST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                EasyPostError::Config(format!("EASYPOST_TIMEOUT_SECS is not an integer: {raw:?}"))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

// Hand-written so the key never lands in logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
