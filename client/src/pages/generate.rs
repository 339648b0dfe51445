//! Generate page: URL/Text forms, preview, download, copy and email share.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use qrwire::QrCodeType;
use qrwire::image::download_file_name;

use crate::net;
use crate::state::generate::{GenerateState, copied_toast, downloaded_toast};
use crate::state::session::{Session, use_session};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser;

#[component]
pub fn GeneratePage() -> impl IntoView {
    let session = use_session();
    let auth = session.auth;
    install_unauth_redirect(auth, use_navigate());

    let form = RwSignal::new(GenerateState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(session, form);
    };

    let on_download = move |_| {
        let Some(image_url) = form.with(|s| s.generated.as_ref().map(|g| g.image_url.clone())) else {
            return;
        };
        if browser::download(&image_url, &download_file_name(browser::now_ms())) {
            session.notify(downloaded_toast());
        }
    };

    let on_copy = move |_| {
        let Some(content) = form.with(|s| s.generated.as_ref().map(|g| g.content.clone())) else {
            return;
        };
        session.copy_text(content, copied_toast());
    };

    let on_share = move |_| share(session, form);

    let tab = move |mode: QrCodeType| {
        view! {
            <button
                class="generate-page__tab"
                class:generate-page__tab--active=move || form.with(|s| s.mode == mode)
                type="button"
                on:click=move |_| form.update(|s| s.set_mode(mode))
            >
                {mode.label()}
            </button>
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="generate-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="generate-page">
                <h1>"Generate QR Code"</h1>
                <div class="generate-page__grid">
                    <section class="generate-page__card">
                        <h2>"Create New QR Code"</h2>
                        <p class="generate-page__hint">"Select the type of QR code you want to generate"</p>
                        <div class="generate-page__tabs" role="tablist">
                            {tab(QrCodeType::Url)}
                            {tab(QrCodeType::Text)}
                        </div>
                        <form class="generate-form" on:submit=on_submit>
                            <label class="generate-form__label">
                                "Title (Optional)"
                                <input
                                    class="generate-form__input"
                                    type="text"
                                    placeholder="My QR Code"
                                    prop:value=move || form.with(|s| s.draft().title.clone())
                                    on:input=move |ev| form.update(|s| s.set_title(event_target_value(&ev)))
                                />
                            </label>
                            {move || {
                                if form.with(|s| s.mode == QrCodeType::Url) {
                                    view! {
                                        <label class="generate-form__label">
                                            "URL"
                                            <input
                                                class="generate-form__input"
                                                type="text"
                                                placeholder="https://example.com"
                                                prop:value=move || form.with(|s| s.url.content.clone())
                                                on:input=move |ev| form.update(|s| s.set_content(event_target_value(&ev)))
                                            />
                                        </label>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <label class="generate-form__label">
                                            "Text"
                                            <textarea
                                                class="generate-form__input generate-form__textarea"
                                                placeholder="Enter your text here"
                                                prop:value=move || form.with(|s| s.text.content.clone())
                                                on:input=move |ev| form.update(|s| s.set_content(event_target_value(&ev)))
                                            ></textarea>
                                        </label>
                                    }
                                        .into_any()
                                }
                            }}
                            <Show when=move || form.with(|s| s.draft().error.is_some())>
                                <p class="generate-form__error">
                                    {move || form.with(|s| s.draft().error.clone().unwrap_or_default())}
                                </p>
                            </Show>
                            <button class="btn generate-form__submit" type="submit" disabled=move || form.with(|s| s.submitting)>
                                {move || if form.with(|s| s.submitting) { "Generating..." } else { "Generate QR Code" }}
                            </button>
                        </form>
                    </section>

                    <section class="generate-page__card generate-page__result">
                        <h2>"Generated QR Code"</h2>
                        <Show
                            when=move || form.with(|s| s.generated.is_some())
                            fallback=|| view! { <p class="generate-page__placeholder">"Your QR code will appear here"</p> }
                        >
                            <img
                                class="generate-page__preview"
                                src=move || form.with(|s| s.generated.as_ref().map(|g| g.image_url.clone()).unwrap_or_default())
                                alt="Generated QR Code"
                            />
                            <div class="generate-page__actions">
                                <button class="btn btn--outline" on:click=on_download>"Download"</button>
                                <button class="btn btn--outline" on:click=on_copy>"Copy Content"</button>
                            </div>
                            <div class="generate-page__share">
                                <input
                                    class="generate-form__input"
                                    type="email"
                                    placeholder="friend@example.com"
                                    prop:value=move || form.with(|s| s.share_email.clone())
                                    on:input=move |ev| form.update(|s| s.share_email = event_target_value(&ev))
                                />
                                <button class="btn" on:click=on_share disabled=move || form.with(|s| s.sharing)>
                                    {move || if form.with(|s| s.sharing) { "Sharing..." } else { "Share via Email" }}
                                </button>
                            </div>
                        </Show>
                    </section>
                </div>
            </div>
        </Show>
    }
}

fn submit(session: Session, form: RwSignal<GenerateState>) {
    let Some(request) = form.try_update(GenerateState::prepare_submit).flatten() else {
        return;
    };
    let api = session.api();
    leptos::task::spawn_local(async move {
        let result = net::qrcodes::generate(&api, &request.content, request.kind, request.title.as_deref()).await;
        let toast = match result {
            Ok(code) => form.try_update(|s| s.apply_generated(code, request.content)),
            Err(err) => form.try_update(|s| s.apply_generate_error(&err)),
        };
        if let Some(toast) = toast {
            session.notify(toast);
        }
    });
}

fn share(session: Session, form: RwSignal<GenerateState>) {
    let Some((id, email)) = form.try_update(GenerateState::prepare_share).flatten() else {
        return;
    };
    let api = session.api();
    leptos::task::spawn_local(async move {
        let toast = match net::qrcodes::share(&api, &id, &email).await {
            Ok(()) => form.try_update(|s| s.apply_shared(&email)),
            Err(err) => form.try_update(|s| s.apply_share_error(&err)),
        };
        if let Some(toast) = toast {
            session.notify(toast);
        }
    });
}
