//! Shared wire model and request shaping for the QR code REST API.
//!
//! This crate owns the JSON representation exchanged with the backend and is
//! used by `client`, `server` and `cli`. Everything here is pure: no I/O, so
//! the browser build and native tools agree on paths, query parameters,
//! validation and pagination math.

pub mod endpoints;
pub mod image;
pub mod model;
pub mod query;
pub mod validate;

pub use model::{
    AuthResponse, CreateQrCodeRequest, ErrorBody, LoginRequest, Paginated, QrCode, QrCodeType, RegisterRequest,
    ShareRequest, User,
};
pub use query::{ListQuery, PAGE_SIZE, total_pages};
pub use validate::ValidationError;
