use std::sync::Arc;

use super::*;
use crate::net::test_helpers::{MockTransport, client, json, qr_code_json};
use crate::net::token::MemoryTokenStore;

#[tokio::test]
async fn generate_posts_content_type_and_title() {
    let transport = Arc::new(MockTransport::new(vec![json(201, qr_code_json("q1", "hello"))]));
    let tokens = Arc::new(MemoryTokenStore::with_token("t1"));
    let api = client(&transport, &tokens);

    let code = generate(&api, "hello", QrCodeType::Text, Some("Greeting")).await.unwrap();

    assert_eq!(code.id, "q1");
    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "/api/qrcodes");
    assert_eq!(
        sent.body,
        Some(serde_json::json!({ "content": "hello", "type": "text", "title": "Greeting" }))
    );
}

#[tokio::test]
async fn list_sends_page_and_limit_without_dates() {
    let items: Vec<_> = (0..5).map(|i| qr_code_json(&format!("q{i}"), "x")).collect();
    let transport = Arc::new(MockTransport::new(vec![json(
        200,
        serde_json::json!({ "data": items, "total": 12, "page": 2, "limit": 5 }),
    )]));
    let tokens = Arc::new(MemoryTokenStore::with_token("t1"));
    let api = client(&transport, &tokens);

    let page = list(&api, &ListQuery::new(2)).await.unwrap();

    assert_eq!(page.data.len(), 5);
    assert_eq!(page.total_pages(qrwire::PAGE_SIZE), 3);
    assert_eq!(transport.requests()[0].url, "/api/qrcodes?page=2&limit=5");
}

#[tokio::test]
async fn share_posts_email_and_ignores_empty_body() {
    let transport = Arc::new(MockTransport::new(vec![Ok(crate::net::http::RawResponse {
        status: 200,
        body: String::new(),
    })]));
    let tokens = Arc::new(MemoryTokenStore::with_token("t1"));
    let api = client(&transport, &tokens);

    share(&api, "q1", "friend@example.com").await.unwrap();

    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "/api/qrcodes/q1/share");
    assert_eq!(sent.body, Some(serde_json::json!({ "email": "friend@example.com" })));
}

#[tokio::test]
async fn share_failure_surfaces_status() {
    let transport = Arc::new(MockTransport::new(vec![json(500, serde_json::json!({}))]));
    let tokens = Arc::new(MemoryTokenStore::with_token("t1"));
    let api = client(&transport, &tokens);

    let err = share(&api, "q1", "friend@example.com").await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, message: None });
}
