//! URLs for the third-party QR image renderer.
//!
//! The client never renders QR images itself; it points `<img>` tags and
//! downloads at this service.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

pub const IMAGE_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Edge length used for list thumbnails.
pub const THUMBNAIL_SIZE: u32 = 150;

/// Edge length used for the freshly generated preview.
pub const PREVIEW_SIZE: u32 = 200;

/// Image URL for `content` rendered as a `size`x`size` square.
#[must_use]
pub fn image_url(content: &str, size: u32) -> String {
    format!(
        "{IMAGE_SERVICE_URL}?size={size}x{size}&data={}",
        urlencoding::encode(content)
    )
}

/// File name offered when saving a rendered image.
#[must_use]
pub fn download_file_name(epoch_ms: u64) -> String {
    format!("qrcode-{epoch_ms}.png")
}
