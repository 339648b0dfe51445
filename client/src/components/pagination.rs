//! Previous/Next pager for the dashboard listing.

use leptos::prelude::*;

/// Renders nothing unless there is more than one page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    class="btn btn--outline"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_previous.run(())
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="btn btn--outline"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
