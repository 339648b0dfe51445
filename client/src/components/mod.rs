//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and listing pieces while reading shared
//! state from the [`crate::state::session::Session`] context.

pub mod navbar;
pub mod pagination;
pub mod qr_card;
pub mod toaster;
