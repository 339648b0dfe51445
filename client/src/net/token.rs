//! Bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only credential the client keeps. It is written by
//! login/register, cleared by logout, and read whenever a request is shaped.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::sync::{Mutex, PoisonError};

use crate::util::storage;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage for the session's bearer token.
pub trait TokenStore: Send + Sync {
    /// Current token; blank values count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` store. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        storage::get_item(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn set(&self, token: &str) {
        storage::set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        storage::remove_item(TOKEN_KEY);
    }
}

/// In-process store. The mutex serializes access when shared across threads.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|t| !t.trim().is_empty())
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
