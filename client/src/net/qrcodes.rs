//! QR code service: create, list and share records.

#[cfg(test)]
#[path = "qrcodes_test.rs"]
mod qrcodes_test;

use qrwire::{CreateQrCodeRequest, ListQuery, Paginated, QrCode, QrCodeType, ShareRequest, endpoints};

use super::http::{ApiClient, ApiError};

/// `POST /qrcodes`. A blank title is omitted from the body.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange.
pub async fn generate(
    api: &ApiClient,
    content: &str,
    kind: QrCodeType,
    title: Option<&str>,
) -> Result<QrCode, ApiError> {
    let body = CreateQrCodeRequest::new(content, kind, title);
    api.send(api.post(endpoints::QR_CODES, &body)?).await
}

/// `GET /qrcodes` for one page, with date bounds only when set.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange.
pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Paginated<QrCode>, ApiError> {
    api.send(api.get_with_query(endpoints::QR_CODES, &query.to_query_string()))
        .await
}

/// `POST /qrcodes/{id}/share`; the backend sends the email.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange.
pub async fn share(api: &ApiClient, id: &str, email: &str) -> Result<(), ApiError> {
    let body = ShareRequest { email: email.to_owned() };
    api.send_empty(api.post(&endpoints::share(id), &body)?).await
}
