use super::*;

#[test]
fn image_url_carries_size_and_data() {
    let url = image_url("hello", PREVIEW_SIZE);
    assert_eq!(url, "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=hello");
    assert!(url.contains("data=hello"));
}

#[test]
fn image_url_percent_encodes_content() {
    let url = image_url("https://example.com/?a=b&c=d e", THUMBNAIL_SIZE);
    assert!(url.ends_with("data=https%3A%2F%2Fexample.com%2F%3Fa%3Db%26c%3Dd%20e"));
    assert!(url.contains("size=150x150"));
}

#[test]
fn download_file_name_uses_timestamp() {
    assert_eq!(download_file_name(1_700_000_000_000), "qrcode-1700000000000.png");
}
