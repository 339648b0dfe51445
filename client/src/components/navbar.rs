//! Top navigation bar.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Brand link plus either the signed-in links or the Login/Register buttons.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    let signed_in = move || auth.with(|a| a.user.is_some());
    let user_name = move || auth.with(|a| a.user_name().unwrap_or_default().to_owned());

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">"QR Code System"</a>
                <div class="navbar__links">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn btn--outline" href="/login">"Login"</a>
                                <a class="btn btn--outline" href="/register">"Register"</a>
                            }
                        }
                    >
                        <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                        <a class="navbar__link" href="/generate">"Generate QR"</a>
                        <a class="navbar__link" href="/scan">"Scan QR"</a>
                        <span class="navbar__greeting">"Hello, " {user_name}</span>
                        <button class="btn btn--outline" on:click=move |_| session.logout()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
