/// Configuration management for the client
///
/// This module loads configuration from environment variables and
/// provides a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `FOLIOBOARD_API_URL`: Backend base URL (default: http://localhost:8001)
/// - `FOLIOBOARD_API_TIMEOUT_SECS`: Request timeout (default: 10)
/// - `FOLIOBOARD_PAGE_SIZE`: Page size for list fetches (default: 50)
/// - `FOLIOBOARD_SEARCH_DEBOUNCE_MS`: Search quiet period (default: 300)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use folioboard_client::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("API at {}", config.api.base_url);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,

    /// Search behavior configuration
    pub search: SearchConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Page size for list fetches
    pub page_size: usize,
}

/// Search behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a typed query is dispatched, in milliseconds
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                base_url: "http://localhost:8001".to_string(),
                timeout_secs: 10,
                page_size: 50,
            },
            search: SearchConfig { debounce_ms: 300 },
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparseable.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let base_url =
            env::var("FOLIOBOARD_API_URL").unwrap_or(defaults.api.base_url);
        let timeout_secs = match env::var("FOLIOBOARD_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>()?,
            Err(_) => defaults.api.timeout_secs,
        };
        let page_size = match env::var("FOLIOBOARD_PAGE_SIZE") {
            Ok(raw) => raw.parse::<usize>()?,
            Err(_) => defaults.api.page_size,
        };
        let debounce_ms = match env::var("FOLIOBOARD_SEARCH_DEBOUNCE_MS") {
            Ok(raw) => raw.parse::<u64>()?,
            Err(_) => defaults.search.debounce_ms,
        };

        if page_size == 0 {
            anyhow::bail!("FOLIOBOARD_PAGE_SIZE must be positive");
        }

        Ok(Config {
            api: ApiConfig {
                base_url,
                timeout_secs,
                page_size,
            },
            search: SearchConfig { debounce_ms },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8001");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.page_size, 50);
        assert_eq!(config.search.debounce_ms, 300);
    }
}
