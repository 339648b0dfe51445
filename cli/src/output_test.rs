use qrwire::QrCodeType;

use super::*;

fn code(id: &str, title: Option<&str>) -> QrCode {
    QrCode {
        id: id.to_owned(),
        user_id: "u1".to_owned(),
        content: "https://example.com".to_owned(),
        kind: QrCodeType::Url,
        title: title.map(str::to_owned),
        created_at: "2024-03-05T10:00:00.000Z".to_owned(),
    }
}

#[test]
fn code_line_shows_label_date_and_title() {
    assert_eq!(code_line(&code("q1", Some("Site"))), "q1  URL   March 5, 2024  Site");
}

#[test]
fn code_line_uses_placeholder_for_missing_title() {
    assert!(code_line(&code("q1", None)).ends_with("Untitled QR Code"));
}

#[test]
fn empty_listing_prints_empty_state() {
    let listing = Paginated { data: vec![], total: 0, page: 1, limit: 5 };
    assert_eq!(render_listing(&listing, 1, 5), "You haven't created any QR codes yet.\n");
}

#[test]
fn multi_page_listing_ends_with_footer() {
    let listing = Paginated { data: vec![code("q1", None), code("q2", None)], total: 12, page: 2, limit: 5 };
    let out = render_listing(&listing, 2, 5);
    assert!(out.ends_with("Page 2 of 3 (12 total)\n"));
    assert_eq!(out.matches("https://api.qrserver.com/v1/create-qr-code/?size=150x150").count(), 2);
}

#[test]
fn single_page_listing_has_no_footer() {
    let listing = Paginated { data: vec![code("q1", None)], total: 1, page: 1, limit: 5 };
    assert!(!render_listing(&listing, 1, 5).contains("Page "));
}

#[test]
fn generated_output_links_preview_image() {
    let out = render_generated(&code("q9", Some("Site")), "https://example.com");
    assert!(out.starts_with("Generated q9"));
    assert!(out.contains("size=200x200&data=https%3A%2F%2Fexample.com"));
}
