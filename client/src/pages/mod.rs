//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates state transitions
//! to `state` and rendering details to `components`.

pub mod dashboard;
pub mod generate;
pub mod home;
pub mod login;
pub mod register;
pub mod scan;
