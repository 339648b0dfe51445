//! Server error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use qrwire::ErrorBody;

/// A configuration value could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Failures while relaying a request to the REST backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The incoming body could not be read.
    #[error("request body unreadable: {0}")]
    Body(String),

    /// The incoming body exceeded the relay limit.
    #[error("request body larger than {0} bytes")]
    TooLarge(usize),

    /// The path would leave the backend's `/api/` tree.
    #[error("rejected request path: {0}")]
    Path(String),

    /// The backend could not be reached or its response could not be read.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) | Self::Path(_) => StatusCode::BAD_REQUEST,
            Self::TooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ClientBuild(_) | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Body(_) => "invalid request body",
            Self::TooLarge(_) => "request body too large",
            Self::Path(_) => "invalid request path",
            Self::ClientBuild(_) | Self::Upstream(_) => "backend unavailable",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        let body = ErrorBody { message: Some(self.public_message().to_owned()) };
        (self.status(), Json(body)).into_response()
    }
}
