use super::*;

#[test]
fn user_reads_mongo_style_id_and_tolerates_missing_email() {
    let user: User = serde_json::from_value(serde_json::json!({ "_id": "1", "name": "A" })).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "A");
    assert_eq!(user.email, "");
}

#[test]
fn auth_response_parses_token_and_user() {
    let raw = r#"{"token":"t1","user":{"_id":"1","name":"A","email":"a@b.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.user.email, "a@b.com");
}

#[test]
fn qr_code_parses_camel_case_fields() {
    let code: QrCode = serde_json::from_value(serde_json::json!({
        "_id": "q1",
        "userId": "u1",
        "content": "hello",
        "type": "text",
        "createdAt": "2024-03-05T10:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(code.id, "q1");
    assert_eq!(code.user_id, "u1");
    assert_eq!(code.kind, QrCodeType::Text);
    assert_eq!(code.title, None);
    assert_eq!(code.created_at, "2024-03-05T10:00:00.000Z");
}

#[test]
fn qr_code_rejects_unknown_type() {
    let result = serde_json::from_value::<QrCode>(serde_json::json!({
        "_id": "q1",
        "content": "x",
        "type": "vcard"
    }));
    assert!(result.is_err());
}

#[test]
fn display_title_falls_back_for_missing_or_blank_titles() {
    let mut code = QrCode {
        id: "q1".to_owned(),
        user_id: "u1".to_owned(),
        content: "hello".to_owned(),
        kind: QrCodeType::Text,
        title: None,
        created_at: String::new(),
    };
    assert_eq!(code.display_title(), "Untitled QR Code");
    code.title = Some("  ".to_owned());
    assert_eq!(code.display_title(), "Untitled QR Code");
    code.title = Some("Menu".to_owned());
    assert_eq!(code.display_title(), "Menu");
}

#[test]
fn qr_code_type_parses_case_insensitively() {
    assert_eq!("URL".parse::<QrCodeType>(), Ok(QrCodeType::Url));
    assert_eq!(" text ".parse::<QrCodeType>(), Ok(QrCodeType::Text));
    assert!("wifi".parse::<QrCodeType>().is_err());
    assert_eq!(QrCodeType::Text.label(), "TEXT");
}

#[test]
fn create_request_omits_blank_title() {
    let body = CreateQrCodeRequest::new("hello", QrCodeType::Text, Some("   "));
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "content": "hello", "type": "text" })
    );
}

#[test]
fn create_request_keeps_trimmed_title() {
    let body = CreateQrCodeRequest::new("https://example.com", QrCodeType::Url, Some(" Site "));
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "content": "https://example.com", "type": "url", "title": "Site" })
    );
}

#[test]
fn paginated_total_pages_rounds_up() {
    let page: Paginated<QrCode> =
        serde_json::from_value(serde_json::json!({ "data": [], "total": 12, "page": 2, "limit": 5 })).unwrap();
    assert_eq!(page.total_pages(5), 3);
}

#[test]
fn error_body_message_is_extracted_when_present() {
    assert_eq!(
        ErrorBody::message_from(r#"{"message":"Invalid credentials"}"#),
        Some("Invalid credentials".to_owned())
    );
    assert_eq!(ErrorBody::message_from(r#"{"message":"  "}"#), None);
    assert_eq!(ErrorBody::message_from("<html>oops</html>"), None);
}
