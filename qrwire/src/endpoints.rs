//! REST paths, relative to the `/api` base.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Base path every endpoint is mounted under.
pub const API_BASE: &str = "/api";

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const CURRENT_USER: &str = "/auth/me";
pub const QR_CODES: &str = "/qrcodes";

/// `POST /qrcodes/{id}/share`. The id is percent-encoded as a path segment.
#[must_use]
pub fn share(id: &str) -> String {
    format!("{QR_CODES}/{}/share", urlencoding::encode(id))
}

/// Join a base URL (or base path) with an endpoint path.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
