//! Blocking-free REST calls against the QR code backend.

use std::time::Duration;

use qrwire::{ErrorBody, endpoints};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CliError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), token })
    }

    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, CliError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Ok(ensure_success(response).await?.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, CliError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Ok(ensure_success(response).await?.json::<T>().await?)
    }

    /// POST whose success body is ignored.
    pub async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), CliError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), &body))
}

/// Map a failed response to [`CliError::Status`], preferring the backend's
/// `message`.
pub fn status_error(status: u16, body: &str) -> CliError {
    let message = ErrorBody::message_from(body).unwrap_or_else(|| match status {
        401 | 403 => "not authorized; run `qrcodes login` again".to_owned(),
        _ => "request failed".to_owned(),
    });
    CliError::Status { status, message }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
