//! Session: the explicitly constructed auth context for one app mount.
//!
//! DESIGN
//! ======
//! A [`Session`] is built once in `App`, started with [`Session::init`], and
//! handed to routes through context rather than living in a global. It owns
//! the auth and toast signals plus the shared [`ApiClient`]. Logout is the
//! teardown: it forgets the token and the user together.
//!
//! The transition rules are free functions over plain state so they can be
//! exercised without a reactive runtime.
//!
//! ERROR HANDLING
//! ==============
//! Login/register failures are reported as a toast *and* returned, so forms
//! can keep their input. The mount-time user lookup never notifies: a rejected
//! token (401/403) is cleared, any other failure keeps the token and only logs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use qrwire::{AuthResponse, User};

use super::auth::AuthState;
use super::generate::copy_failed_toast;
use super::toast::{Toast, ToastState};
use crate::net;
use crate::net::http::{ApiClient, ApiError};
use crate::net::token::TokenStore;
use crate::util::browser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Register,
}

impl AuthAction {
    fn success(self, user: &User) -> Toast {
        match self {
            Self::Login => Toast::success("Login successful", format!("Welcome back, {}!", user.name)),
            Self::Register => Toast::success("Registration successful", format!("Welcome, {}!", user.name)),
        }
    }

    fn failure(self, err: &ApiError) -> Toast {
        match self {
            Self::Login => Toast::error("Login failed", err.user_message("Failed to login. Please try again.")),
            Self::Register => {
                Toast::error("Registration failed", err.user_message("Failed to register. Please try again."))
            }
        }
    }
}

pub fn begin_auth(auth: &mut AuthState) {
    auth.loading = true;
}

/// Apply a login/register result and return the toast to show.
///
/// A failure leaves any existing user in place.
pub fn complete_auth(auth: &mut AuthState, action: AuthAction, result: &Result<AuthResponse, ApiError>) -> Toast {
    auth.loading = false;
    match result {
        Ok(resp) => {
            auth.user = Some(resp.user.clone());
            action.success(&resp.user)
        }
        Err(err) => action.failure(err),
    }
}

/// Apply the mount-time current-user lookup.
pub fn resolve_current_user(auth: &mut AuthState, tokens: &dyn TokenStore, result: Result<User, ApiError>) {
    auth.loading = false;
    match result {
        Ok(user) => auth.user = Some(user),
        Err(err) if err.is_unauthorized() => {
            tokens.clear();
            auth.user = None;
        }
        Err(err) => {
            leptos::logging::warn!("current user lookup failed, keeping stored token: {err}");
            auth.user = None;
        }
    }
}

/// Forget the token and the user.
pub fn sign_out(auth: &mut AuthState, api: &ApiClient) -> Toast {
    net::auth::logout(api);
    auth.user = None;
    auth.loading = false;
    Toast::success("Logged out", "You have been successfully logged out.")
}

/// Toast for a finished clipboard write: `copied` on success.
pub fn clipboard_toast(copied_ok: bool, copied: Toast) -> Toast {
    if copied_ok { copied } else { copy_failed_toast() }
}

/// Auth + notification context for one mount of the app.
#[derive(Clone, Copy)]
pub struct Session {
    pub auth: RwSignal<AuthState>,
    pub toasts: RwSignal<ToastState>,
    api: StoredValue<ApiClient>,
}

impl Session {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            auth: RwSignal::new(AuthState::resolving()),
            toasts: RwSignal::new(ToastState::default()),
            api: StoredValue::new(api),
        }
    }

    #[must_use]
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Resolve the current user from any stored token.
    ///
    /// Loading flips to `false` exactly once when the lookup settles. Without a
    /// token no request is made.
    pub fn init(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = *self;
            leptos::task::spawn_local(async move {
                let api = session.api();
                if api.tokens().get().is_none() {
                    session.auth.update(|a| a.loading = false);
                    return;
                }
                let result = net::auth::current_user(&api).await;
                session.auth.update(|a| resolve_current_user(a, api.tokens(), result));
            });
        }
    }

    /// # Errors
    ///
    /// Returns the backend failure after showing an error toast.
    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        self.auth.update(begin_auth);
        let api = self.api();
        let result = net::auth::login(&api, &email, &password).await;
        self.finish(AuthAction::Login, result)
    }

    /// # Errors
    ///
    /// Returns the backend failure after showing an error toast.
    pub async fn register(&self, name: String, email: String, password: String) -> Result<(), ApiError> {
        self.auth.update(begin_auth);
        let api = self.api();
        let result = net::auth::register(&api, &name, &email, &password).await;
        self.finish(AuthAction::Register, result)
    }

    fn finish(&self, action: AuthAction, result: Result<AuthResponse, ApiError>) -> Result<(), ApiError> {
        if let Some(toast) = self.auth.try_update(|a| complete_auth(a, action, &result)) {
            self.notify(toast);
        }
        result.map(|_| ())
    }

    pub fn logout(&self) {
        let api = self.api();
        if let Some(toast) = self.auth.try_update(|a| sign_out(a, &api)) {
            self.notify(toast);
        }
    }

    /// Queue a toast; in the browser it is dismissed after a timeout.
    pub fn notify(&self, toast: Toast) {
        let id = self.toasts.try_update(|t| t.push(toast));
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = id {
                let toasts = self.toasts;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(super::toast::TOAST_TIMEOUT_MS).await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    /// Copy `text` and toast the outcome once the browser settles the write.
    pub fn copy_text(&self, text: String, copied: Toast) {
        let session = *self;
        leptos::task::spawn_local(async move {
            let copied_ok = browser::copy_to_clipboard(&text).await;
            session.notify(clipboard_toast(copied_ok, copied));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.dismiss(id));
    }
}

/// The session provided by `App`.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
