//! Application state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each module holds plain data plus pure transition methods. Pages wrap the
//! data in signals and drive the transitions from network callbacks, which
//! keeps every rule testable without a browser.

pub mod auth;
pub mod dashboard;
pub mod generate;
pub mod scan;
pub mod session;
pub mod toast;
