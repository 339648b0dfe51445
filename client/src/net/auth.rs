//! Auth service: thin wrappers over the `/auth` endpoints.
//!
//! Login and register persist the returned token; logout only forgets it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use qrwire::{AuthResponse, LoginRequest, RegisterRequest, User, endpoints};

use super::http::{ApiClient, ApiError};

/// `POST /auth/login`, storing the token on success.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange; the store is untouched.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let resp: AuthResponse = api.send(api.post(endpoints::LOGIN, &body)?).await?;
    api.tokens().set(&resp.token);
    Ok(resp)
}

/// `POST /auth/register`, storing the token on success.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange; the store is untouched.
pub async fn register(api: &ApiClient, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = RegisterRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() };
    let resp: AuthResponse = api.send(api.post(endpoints::REGISTER, &body)?).await?;
    api.tokens().set(&resp.token);
    Ok(resp)
}

/// Forget the stored token. No backend call.
pub fn logout(api: &ApiClient) {
    api.tokens().clear();
}

/// `GET /auth/me` with whatever token is stored.
///
/// # Errors
///
/// Returns the [`ApiError`] from the exchange.
pub async fn current_user(api: &ApiClient) -> Result<User, ApiError> {
    api.send(api.get(endpoints::CURRENT_USER)).await
}
