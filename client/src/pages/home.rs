//! Landing page.

use leptos::prelude::*;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_session().auth;
    let signed_in = move || auth.with(|a| a.user.is_some());

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"QR Code Generation & Scanning System"</h1>
                <p class="home-page__lead">
                    "Create, scan, manage, and share QR codes with ease. Everything you need in one place."
                </p>
                <div class="home-page__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn btn--lg" href="/register">"Get Started"</a>
                                <a class="btn btn--lg btn--outline" href="/login">"Login"</a>
                            }
                        }
                    >
                        <a class="btn btn--lg" href="/generate">"Generate QR Code"</a>
                        <a class="btn btn--lg btn--outline" href="/scan">"Scan QR Code"</a>
                    </Show>
                </div>
            </section>
            <section class="home-page__features">
                <h2>"Key Features"</h2>
                <div class="home-page__feature-grid">
                    <div class="home-page__feature">
                        <h3>"Generate QR Codes"</h3>
                        <p>"Quickly create QR codes for URLs and text with just a few clicks."</p>
                    </div>
                    <div class="home-page__feature">
                        <h3>"Scan QR Codes"</h3>
                        <p>"Scan and process QR codes instantly."</p>
                    </div>
                    <div class="home-page__feature">
                        <h3>"QR Code History"</h3>
                        <p>"Keep track of all your QR codes with date filtering."</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
