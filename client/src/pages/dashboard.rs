//! Dashboard page listing the user's QR codes with date filters and paging.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Fetches one page whenever the page number or a date bound
//! changes; the sequencing in [`DashboardState`] keeps only the latest answer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use qrwire::query::{date_input_value, parse_date_input};
use time::Date;

use crate::components::pagination::Pagination;
use crate::components::qr_card::QrCard;
use crate::net;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, listing_key};
use crate::state::session::{Session, use_session};
use crate::state::toast::Toast;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    install_unauth_redirect(auth, use_navigate());

    let dashboard = RwSignal::new(DashboardState::default());
    let signed_in = Memo::new(move |_| auth.with(AuthState::is_signed_in));
    let key = Memo::new(move |_| listing_key(signed_in.get(), dashboard.with(DashboardState::query)));

    Effect::new(move || {
        // Page, bounds and sign-in only; fetch bookkeeping does not retrigger.
        if key.get().is_some() {
            fetch_page(session, dashboard);
        }
    });

    let on_start = move |ev: leptos::ev::Event| {
        set_bound(session, dashboard, &event_target_value(&ev), DashboardState::set_start_date);
    };
    let on_end = move |ev: leptos::ev::Event| {
        set_bound(session, dashboard, &event_target_value(&ev), DashboardState::set_end_date);
    };
    let on_previous = Callback::new(move |()| {
        dashboard.update(|s| {
            s.previous_page();
        });
    });
    let on_next = Callback::new(move |()| {
        dashboard.update(|s| {
            s.next_page();
        });
    });

    let bound_value = move |pick: fn(&DashboardState) -> Option<Date>| {
        dashboard.with(|s| pick(s).map(date_input_value).unwrap_or_default())
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>"Your QR Codes"</h1>
                    <a class="btn" href="/generate">"Create New QR Code"</a>
                </header>

                <section class="dashboard-page__filters">
                    <h2>"Filter QR Codes"</h2>
                    <p class="dashboard-page__hint">"Filter your QR codes by date range"</p>
                    <div class="dashboard-page__filter-row">
                        <label class="dashboard-page__filter">
                            "Start Date"
                            <input
                                type="date"
                                prop:value=move || bound_value(|s| s.start_date)
                                on:change=on_start
                            />
                        </label>
                        <label class="dashboard-page__filter">
                            "End Date"
                            <input
                                type="date"
                                prop:value=move || bound_value(|s| s.end_date)
                                on:change=on_end
                            />
                        </label>
                        <button class="btn btn--outline" on:click=move |_| dashboard.update(DashboardState::clear_filters)>
                            "Clear Filters"
                        </button>
                    </div>
                </section>

                {move || {
                    let state = dashboard.get();
                    if state.loading {
                        return view! { <p class="dashboard-page__loading">"Loading your QR codes..."</p> }.into_any();
                    }
                    if state.items.is_empty() {
                        return view! {
                            <div class="dashboard-page__empty">
                                <p>"You haven't created any QR codes yet."</p>
                                <a class="btn" href="/generate">"Create Your First QR Code"</a>
                            </div>
                        }
                            .into_any();
                    }
                    state
                        .items
                        .into_iter()
                        .map(|code| view! { <QrCard code=code/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                <Pagination
                    page=Signal::derive(move || dashboard.with(|s| s.page))
                    total_pages=Signal::derive(move || dashboard.with(DashboardState::total_pages))
                    on_previous=on_previous
                    on_next=on_next
                />
            </div>
        </Show>
    }
}

fn fetch_page(session: Session, dashboard: RwSignal<DashboardState>) {
    let Some((seq, query)) = dashboard.try_update(DashboardState::begin_fetch) else {
        return;
    };
    let api = session.api();
    leptos::task::spawn_local(async move {
        match net::qrcodes::list(&api, &query).await {
            Ok(page) => {
                dashboard.update(|s| {
                    s.apply_page(seq, page);
                });
            }
            Err(err) => {
                leptos::logging::warn!("listing page {} failed: {err}", query.page);
                if let Some(toast) = dashboard.try_update(|s| s.apply_error(seq)).flatten() {
                    session.notify(toast);
                }
            }
        }
    });
}

fn set_bound(
    session: Session,
    dashboard: RwSignal<DashboardState>,
    raw: &str,
    apply: fn(&mut DashboardState, Option<Date>),
) {
    match parse_date_input(raw) {
        Ok(date) => dashboard.update(|s| apply(s, date)),
        Err(err) => session.notify(Toast::error("Invalid Date", err.to_string())),
    }
}
