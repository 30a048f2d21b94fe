//! Application configuration

use std::env;
use std::fmt;

use anyhow::{Context, Result};

/// Default Judge.me REST API base URL.
pub const DEFAULT_JUDGE_ME_BASE_URL: &str = "https://api.judge.me/api/v1";

/// Default outbound request timeout.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream reviews API settings
    pub judge_me: JudgeMeConfig,
    /// Interface to bind
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
}

/// Judge.me connection settings
#[derive(Clone)]
pub struct JudgeMeConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Private API token (never logged)
    pub api_token: String,
    /// Shop domain identifying the storefront tenant
    pub shop_domain: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for JudgeMeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JudgeMeConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("shop_domain", &self.shop_domain)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            judge_me: JudgeMeConfig {
                base_url: var("JUDGE_ME_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_JUDGE_ME_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                api_token: var("JUDGE_ME_PRIVATE_API_TOKEN")
                    .context("JUDGE_ME_PRIVATE_API_TOKEN environment variable is required")?,
                shop_domain: var("SHOP_DOMAIN")
                    .context("SHOP_DOMAIN environment variable is required")?,
                timeout_secs: var("UPSTREAM_TIMEOUT_SECS")
                    .map(|value| value.parse::<u64>())
                    .transpose()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            },

            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            server_port: var("SERVER_PORT")
                .or_else(|| var("PORT"))
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
