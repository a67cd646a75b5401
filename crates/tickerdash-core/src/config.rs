//! Environment-driven settings.
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | `TWELVE_DATA_API_KEY` | `demo` | Provider API key |
//! | `TICKERDASH_BASE_URL` | `https://api.twelvedata.com` | Provider base URL |

pub const API_KEY_ENV: &str = "TWELVE_DATA_API_KEY";
pub const BASE_URL_ENV: &str = "TICKERDASH_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";
pub const DEMO_API_KEY: &str = "demo";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const DEMO_KEY_NOTICE: &str =
    "Using demo API key. For production use, set TWELVE_DATA_API_KEY environment variable.";

/// Provider connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
    demo_key: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let settings = Self::from_lookup(|name| std::env::var(name).ok());
        if settings.demo_key {
            tracing::warn!("{API_KEY_ENV} not set, falling back to the demo key");
        }
        settings
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        let base_url = lookup(BASE_URL_ENV)
            .map(|value| value.trim().trim_end_matches('/').to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let demo_key = api_key.is_none();

        Self {
            base_url,
            api_key: api_key.unwrap_or_else(|| DEMO_API_KEY.to_owned()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            demo_key,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// User-visible notice to show while the placeholder key is in effect.
    pub fn notice(&self) -> Option<&'static str> {
        self.demo_key.then_some(DEMO_KEY_NOTICE)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("demo_key", &self.demo_key)
            .finish()
    }
}
