//
//  createsend
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module loads the settings used to build an API [`Client`](crate::api::Client)
//! from a TOML file and the environment.
//!
//! ## Precedence
//!
//! Highest first:
//!
//! 1. Values set explicitly on the [`ClientBuilder`] after [`Config::client_builder`]
//! 2. Environment variables (`CREATESEND_*`)
//! 3. The configuration file
//! 4. Built-in defaults
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/createsend/config.toml`
//! - **macOS**: `~/Library/Application Support/createsend/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\createsend\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! base_url = "https://api.createsend.com/api/v3.3/"
//! api_key = "your-api-key"
//! retry_count = 2
//! timeout_secs = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use createsend::config::Config;
//!
//! let config = Config::load()?;
//! let client = config.client_builder().build()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::ClientBuilder;

/// Environment variable holding an API key.
pub const ENV_API_KEY: &str = "CREATESEND_API_KEY";
/// Environment variable holding an OAuth access token.
pub const ENV_OAUTH_TOKEN: &str = "CREATESEND_OAUTH_TOKEN";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "CREATESEND_BASE_URL";
/// Environment variable overriding the retry count.
pub const ENV_RETRY_COUNT: &str = "CREATESEND_RETRY_COUNT";

/// Settings for building an API client.
///
/// Every field is optional; anything unset falls back to the
/// [`ClientBuilder`] defaults.
///
/// # Examples
///
/// ```rust
/// use createsend::config::Config;
///
/// let config: Config = toml::from_str(r#"
///     api_key = "abc"
///     retry_count = 2
/// "#).unwrap();
/// assert_eq!(config.api_key.as_deref(), Some("abc"));
/// assert_eq!(config.retry_count, Some(2));
/// ```
///
/// # Notes
///
/// - When both `api_key` and `oauth_token` are present, the OAuth token wins
/// - Unknown keys are rejected so typos surface early
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the API. Always treated as `https://`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key, sent as Basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// OAuth access token, sent as a Bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_token: Option<String>,

    /// Extra attempts for idempotent requests whose transport failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u32>,

    /// Request timeout applied by the default transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads the configuration file (if any) and applies environment overrides.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// - The config directory cannot be determined
    /// - The file exists but cannot be read or parsed
    /// - An environment override has an invalid value
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if config_exists(&path) {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Reads and parses a configuration file. The environment is not consulted.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = read_config_file(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config_file(path, &content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "createsend")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies `CREATESEND_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored. Setting one credential clears the other so
    /// the environment fully decides how requests are authenticated.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = Some(url);
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
            self.oauth_token = None;
        }
        if let Some(token) = lookup(ENV_OAUTH_TOKEN) {
            self.oauth_token = Some(token);
            self.api_key = None;
        }
        if let Some(retries) = lookup(ENV_RETRY_COUNT) {
            let retries = retries
                .trim()
                .parse()
                .with_context(|| format!("{} must be a non-negative integer", ENV_RETRY_COUNT))?;
            self.retry_count = Some(retries);
        }
        Ok(())
    }

    /// Returns `true` when either credential is present.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.oauth_token.is_some()
    }

    /// Seeds a [`ClientBuilder`] with these settings.
    ///
    /// Values set on the returned builder take precedence over the config.
    pub fn client_builder(&self) -> ClientBuilder {
        let mut builder = ClientBuilder::new();
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(token) = &self.oauth_token {
            builder = builder.oauth_token(token.clone());
        }
        if let Some(retries) = self.retry_count {
            builder = builder.retry_count(retries);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::auth::Authentication;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_full_file() {
        let config: Config = toml::from_str(
            r#"
            base_url = "api.example.com/v3/"
            oauth_token = "tok"
            retry_count = 3
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("api.example.com/v3/"));
        assert_eq!(config.oauth_token.as_deref(), Some("tok"));
        assert_eq!(config.timeout_secs, Some(10));
        assert!(config.has_credentials());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Config>("apikey = \"x\"").is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = Config {
            api_key: Some("file-key".to_string()),
            retry_count: Some(1),
            ..Default::default()
        };
        config
            .apply_env_with(env(&[
                (ENV_OAUTH_TOKEN, "env-token"),
                (ENV_RETRY_COUNT, "4"),
                (ENV_BASE_URL, ""),
            ]))
            .unwrap();

        assert_eq!(config.oauth_token.as_deref(), Some("env-token"));
        assert_eq!(config.api_key, None);
        assert_eq!(config.retry_count, Some(4));
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_invalid_retry_count() {
        let mut config = Config::default();
        let err = config
            .apply_env_with(env(&[(ENV_RETRY_COUNT, "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_RETRY_COUNT));
    }

    #[test]
    fn test_builder_values_win_over_config() {
        let config = Config {
            base_url: Some("https://config.example.com/".to_string()),
            api_key: Some("config-key".to_string()),
            retry_count: Some(2),
            ..Default::default()
        };

        let client = config
            .client_builder()
            .api_key("explicit-key")
            .build()
            .unwrap();
        assert_eq!(client.authentication(), &Authentication::api_key("explicit-key"));
        assert_eq!(client.base_url().as_str(), "https://config.example.com/");
        assert_eq!(client.retry_count(), 2);
    }

    #[test]
    fn test_empty_config_builder_lacks_credentials() {
        let err = Config::default().client_builder().build().unwrap_err();
        assert!(err.is(crate::api::ErrorCode::AuthenticationNotSet));
    }
}
