//! Card for one stored QR code on the dashboard.

use leptos::prelude::*;
use qrwire::QrCode;
use qrwire::image::{THUMBNAIL_SIZE, image_url};
use qrwire::query::display_date;

#[component]
pub fn QrCard(code: QrCode) -> impl IntoView {
    let title = code.display_title().to_owned();
    let meta = format!("{} • {}", display_date(&code.created_at), code.kind.label());
    let src = image_url(&code.content, THUMBNAIL_SIZE);
    let edge = THUMBNAIL_SIZE.to_string();

    view! {
        <div class="qr-card">
            <div class="qr-card__header">
                <h3 class="qr-card__title">{title}</h3>
                <p class="qr-card__meta">{meta}</p>
            </div>
            <div class="qr-card__image">
                <img src=src alt="QR Code" width=edge.clone() height=edge/>
            </div>
            <p class="qr-card__content">{code.content}</p>
        </div>
    }
}
