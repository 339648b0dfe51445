//! Reverse proxy for `/api/*` onto the QR code REST backend.
//!
//! Method, path, query and body are relayed. Only the headers the backend
//! needs are forwarded; the backend's status, body and content type come back
//! as-is.
//!
//! Paths are confined to the backend's `/api/` tree: any segment that decodes
//! to `.` or `..`, or smuggles a separator, is refused before a request is
//! made.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use qrwire::endpoints::API_BASE;
use url::Url;

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers relayed to the backend.
pub static FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Backend URL for an incoming `/api/...` path and optional query.
///
/// Segments are copied without re-encoding. The result always sits under
/// `{backend}/api/`.
///
/// # Errors
///
/// [`ProxyError::Path`] when the path is outside `/api/` or a segment is a dot
/// segment in any encoding.
pub fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> Result<Url, ProxyError> {
    let rejected = || ProxyError::Path(path.to_owned());
    let rest = path
        .strip_prefix(API_BASE)
        .and_then(|p| p.strip_prefix('/'))
        .ok_or_else(rejected)?;
    for segment in rest.split('/') {
        if !is_plain_segment(segment) {
            return Err(rejected());
        }
    }

    let base = Url::parse(backend).map_err(|e| ProxyError::ClientBuild(format!("backend url: {e}")))?;
    let prefix = format!("{}{API_BASE}/", base.path().trim_end_matches('/'));
    let mut url = base
        .join(&format!("{prefix}{rest}"))
        .map_err(|_| rejected())?;
    url.set_query(query);

    if !url.path().starts_with(&prefix) {
        return Err(rejected());
    }
    Ok(url)
}

fn is_plain_segment(raw: &str) -> bool {
    let Ok(decoded) = urlencoding::decode(raw) else {
        return false;
    };
    !matches!(decoded.as_ref(), "." | "..") && !decoded.contains(['/', '\\'])
}

/// The subset of `headers` relayed to the backend.
pub fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers.get(CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

fn body_error(err: axum::Error) -> ProxyError {
    let inner = err.into_inner();
    if inner.is::<LengthLimitError>() {
        ProxyError::TooLarge(MAX_BODY_BYTES)
    } else {
        ProxyError::Body(inner.to_string())
    }
}

/// `ANY /api/*`: relay to `{backend}/api/*`.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.backend_url, parts.uri.path(), parts.uri.query())?;

    if declared_length(&parts.headers).is_some_and(|len| len > MAX_BODY_BYTES) {
        return Err(ProxyError::TooLarge(MAX_BODY_BYTES));
    }
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(body_error)?;

    let upstream = state
        .http
        .request(parts.method.clone(), url.clone())
        .headers(forwarded_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, %status, "proxied");

    let mut response = (status, Body::from(bytes)).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
