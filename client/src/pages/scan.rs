//! Scan page driven by the scan state machine and a frame decoder.
//!
//! Real camera decoding is not wired; [`SimulatedDecoder`] stands in for it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::scan::{FrameDecoder, ScanPhase, ScanState, SimulatedDecoder, can_open, scanned_copy_toast};
use crate::state::session::{Session, use_session};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser;

#[component]
pub fn ScanPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    install_unauth_redirect(auth, use_navigate());

    let scan = RwSignal::new(ScanState::default());

    let on_start = move |_| start_scan(session, scan, SimulatedDecoder::default());
    let on_reset = move |_| scan.update(ScanState::reset);
    let result_text = move || scan.with(|s| s.result().map(ToOwned::to_owned).unwrap_or_default());

    let on_copy = move |_| {
        session.copy_text(result_text(), scanned_copy_toast());
    };
    let on_open = move |_| {
        let text = result_text();
        if can_open(&text) {
            browser::open_in_new_tab(&text);
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="scan-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="scan-page">
                <h1>"Scan QR Code"</h1>
                <section class="scan-page__card">
                    <h2>"Scan a QR Code"</h2>
                    <p class="scan-page__hint">"Use your device's camera to scan a QR code"</p>
                    <div class="scan-page__viewport">
                        {move || match scan.with(|s| s.phase.clone()) {
                            ScanPhase::Scanning => view! {
                                <div class="scan-page__status">
                                    <p class="scan-page__pulse">"Scanning..."</p>
                                    <p class="scan-page__hint">"Please point your camera at a QR code"</p>
                                </div>
                            }
                                .into_any(),
                            ScanPhase::Result(text) => view! {
                                <div class="scan-page__status">
                                    <p class="scan-page__label">"Scanned Result:"</p>
                                    <p class="scan-page__result">{text}</p>
                                </div>
                            }
                                .into_any(),
                            ScanPhase::Failed(reason) => view! {
                                <div class="scan-page__status scan-page__status--error">
                                    <p>{reason}</p>
                                </div>
                            }
                                .into_any(),
                            ScanPhase::Idle => view! {
                                <p class="scan-page__placeholder">"Camera preview will appear here"</p>
                            }
                                .into_any(),
                        }}
                    </div>
                    <div class="scan-page__actions">
                        <Show
                            when=move || scan.with(|s| s.result().is_some())
                            fallback=move || {
                                view! {
                                    <button class="btn" on:click=on_start disabled=move || scan.with(ScanState::is_scanning)>
                                        {move || if scan.with(ScanState::is_scanning) { "Scanning..." } else { "Start Scanning" }}
                                    </button>
                                }
                            }
                        >
                            <button class="btn btn--outline" on:click=on_copy>"Copy to Clipboard"</button>
                            <Show when=move || can_open(&result_text())>
                                <button class="btn btn--outline" on:click=on_open>"Open URL"</button>
                            </Show>
                            <button class="btn" on:click=on_reset>"Scan Again"</button>
                        </Show>
                    </div>
                </section>
            </div>
        </Show>
    }
}

fn start_scan<D>(session: Session, scan: RwSignal<ScanState>, decoder: D)
where
    D: FrameDecoder + 'static,
{
    let Some(attempt) = scan.try_update(ScanState::start).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let event = decoder.decode().await;
        if let Some(toast) = scan.try_update(|s| s.handle(attempt, event)).flatten() {
            session.notify(toast);
        }
    });
}
