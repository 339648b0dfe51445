//! Networking modules for the QR code REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` shapes and sends requests, `token` owns the bearer credential, and
//! `auth` / `qrcodes` are the thin service calls pages and session use.

pub mod auth;
pub mod http;
pub mod qrcodes;
pub mod token;

#[cfg(test)]
pub(crate) mod test_helpers;
