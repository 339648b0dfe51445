//! Toast stack rendered from the session's notification queue.

use leptos::prelude::*;

use crate::state::session::use_session;
use crate::state::toast::ToastVariant;

#[component]
pub fn Toaster() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                session
                    .toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let destructive = toast.variant == ToastVariant::Destructive;
                        view! {
                            <div class="toast" class:toast--destructive=destructive>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| session.dismiss(id)
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
