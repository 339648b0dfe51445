//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one `reqwest::Client` every proxied request goes through and the
//! backend origin those requests are sent to.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(config.proxy_timeout_secs)))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
