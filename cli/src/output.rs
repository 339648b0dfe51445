//! Plain-text rendering for list and generate results.

use std::fmt::Write as _;

use qrwire::image::{PREVIEW_SIZE, THUMBNAIL_SIZE, image_url};
use qrwire::query::display_date;
use qrwire::{Paginated, QrCode};

pub fn code_line(code: &QrCode) -> String {
    format!(
        "{}  {:<4}  {}  {}",
        code.id,
        code.kind.label(),
        display_date(&code.created_at),
        code.display_title()
    )
}

/// One block per code followed by a page footer when there is more than one
/// page.
pub fn render_listing(listing: &Paginated<QrCode>, page: u32, page_size: u32) -> String {
    if listing.data.is_empty() {
        return "You haven't created any QR codes yet.\n".to_owned();
    }
    let mut out = String::new();
    for code in &listing.data {
        let _ = writeln!(out, "{}", code_line(code));
        let _ = writeln!(out, "    {}", code.content);
        let _ = writeln!(out, "    {}", image_url(&code.content, THUMBNAIL_SIZE));
    }
    let total_pages = listing.total_pages(page_size);
    if total_pages > 1 {
        let _ = writeln!(out, "Page {page} of {total_pages} ({} total)", listing.total);
    }
    out
}

pub fn render_generated(code: &QrCode, content: &str) -> String {
    format!("Generated {}\n{}\n", code_line(code), image_url(content, PREVIEW_SIZE))
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
