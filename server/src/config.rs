//! Server configuration parsed from environment variables.

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin of the QR code REST backend, without a trailing slash.
    pub backend_url: String,
    pub proxy_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QR_BACKEND_URL`: default `http://localhost:5000`, http(s) only
    /// - `QR_PROXY_TIMEOUT_SECS`: default 30, must be positive
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a value that does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let backend_url = lookup("QR_BACKEND_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let parsed = url::Url::parse(&backend_url).ok();
        if !parsed.is_some_and(|u| matches!(u.scheme(), "http" | "https")) {
            return Err(ConfigError::Invalid { var: "QR_BACKEND_URL", value: backend_url });
        }

        let proxy_timeout_secs = parse_or("QR_PROXY_TIMEOUT_SECS", lookup("QR_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        if proxy_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "QR_PROXY_TIMEOUT_SECS", value: "0".to_owned() });
        }

        Ok(Self { port, backend_url, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
