//! Browser side effects: clipboard, file download, new tabs, wall clock.
//!
//! TRADE-OFFS
//! ==========
//! Every helper is best-effort browser-only behavior and reports whether it
//! did anything; SSR and native test paths no-op and return `false`.

/// Write `text` to the system clipboard.
///
/// Resolves to `true` only once the browser accepts the write; a denied
/// permission or rejected promise yields `false`.
#[allow(clippy::unused_async)]
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Save `href` under `file_name` through a temporary `<a download>` element.
pub fn download(href: &str, file_name: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(body) = document.body() else {
            return false;
        };
        let Ok(anchor) = document
            .create_element("a")
            .map_err(|_| ())
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(|_| ()))
        else {
            return false;
        };
        anchor.set_href(href);
        anchor.set_download(file_name);
        if body.append_child(&anchor).is_err() {
            return false;
        }
        anchor.click();
        let _ = body.remove_child(&anchor);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (href, file_name);
        false
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.open_with_url_and_target(url, "_blank").is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        false
    }
}

/// Milliseconds since the Unix epoch; zero outside the browser.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
