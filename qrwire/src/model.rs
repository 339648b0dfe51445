//! Wire DTOs for auth and QR code records.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON (`_id`, `userId`, `createdAt`) via
//! serde renames so the Rust side can keep snake_case names.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Response body of `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token; the only credential the client keeps.
    pub token: String,
    pub user: User,
}

/// Payload kind of a QR code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrCodeType {
    #[default]
    Url,
    Text,
}

impl QrCodeType {
    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
        }
    }

    /// Uppercase label for list views.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for QrCodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QrCodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "url" => Ok(Self::Url),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown QR code type: {other}")),
        }
    }
}

/// A stored QR code record. The rendered image is never part of the record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO-8601 creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: String,
}

impl QrCode {
    /// Title to show in lists, falling back to a placeholder.
    #[must_use]
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Untitled QR Code",
        }
    }
}

/// One page of a listing.
///
/// Invariant: `data.len() <= limit` and `page` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    /// Number of pages for the reported total at the given page size.
    #[must_use]
    pub fn total_pages(&self, page_size: u32) -> u32 {
        crate::query::total_pages(self.total, page_size)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /qrcodes`. A blank title is dropped rather than sent empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQrCodeRequest {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CreateQrCodeRequest {
    #[must_use]
    pub fn new(content: impl Into<String>, kind: QrCodeType, title: Option<&str>) -> Self {
        let title = title.map(str::trim).filter(|t| !t.is_empty()).map(ToOwned::to_owned);
        Self { content: content.into(), kind, title }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub email: String,
}

/// Error body the backend may attach to a failed response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty `message` from a raw response body, if any.
    #[must_use]
    pub fn message_from(raw: &str) -> Option<String> {
        serde_json::from_str::<Self>(raw)
            .ok()
            .and_then(|body| body.message)
            .map(|m| m.trim().to_owned())
            .filter(|m| !m.is_empty())
    }
}
