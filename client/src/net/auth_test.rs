use std::sync::Arc;

use super::*;
use crate::net::http::Method;
use crate::net::test_helpers::{MockTransport, client, json};
use crate::net::token::{MemoryTokenStore, TokenStore};

fn auth_body() -> serde_json::Value {
    serde_json::json!({ "token": "t1", "user": { "_id": "1", "name": "A", "email": "a@b.com" } })
}

#[tokio::test]
async fn login_posts_credentials_and_stores_token() {
    let transport = Arc::new(MockTransport::new(vec![json(200, auth_body())]));
    let tokens = Arc::new(MemoryTokenStore::default());
    let api = client(&transport, &tokens);

    let resp = login(&api, "a@b.com", "pw").await.unwrap();

    assert_eq!(resp.user.id, "1");
    assert_eq!(tokens.get(), Some("t1".to_owned()));
    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "/api/auth/login");
    assert_eq!(sent.body, Some(serde_json::json!({ "email": "a@b.com", "password": "pw" })));
}

#[tokio::test]
async fn failed_login_leaves_store_untouched() {
    let transport = Arc::new(MockTransport::new(vec![json(
        401,
        serde_json::json!({ "message": "Invalid credentials" }),
    )]));
    let tokens = Arc::new(MemoryTokenStore::default());
    let api = client(&transport, &tokens);

    let err = login(&api, "a@b.com", "bad").await.unwrap_err();

    assert_eq!(err.user_message("fallback"), "Invalid credentials");
    assert_eq!(tokens.get(), None);
}

#[tokio::test]
async fn register_posts_name_and_stores_token() {
    let transport = Arc::new(MockTransport::new(vec![json(201, auth_body())]));
    let tokens = Arc::new(MemoryTokenStore::default());
    let api = client(&transport, &tokens);

    register(&api, "A", "a@b.com", "pw").await.unwrap();

    assert_eq!(tokens.get(), Some("t1".to_owned()));
    let sent = &transport.requests()[0];
    assert_eq!(sent.url, "/api/auth/register");
    assert_eq!(sent.body, Some(serde_json::json!({ "name": "A", "email": "a@b.com", "password": "pw" })));
}

#[tokio::test]
async fn requests_after_logout_carry_no_authorization() {
    let transport = Arc::new(MockTransport::new(vec![
        json(200, serde_json::json!({ "_id": "1", "name": "A" })),
        json(401, serde_json::json!({})),
    ]));
    let tokens = Arc::new(MemoryTokenStore::with_token("t1"));
    let api = client(&transport, &tokens);

    current_user(&api).await.unwrap();
    logout(&api);
    let err = current_user(&api).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(tokens.get(), None);
    let sent = transport.requests();
    assert_eq!(sent[0].authorization(), Some("Bearer t1".to_owned()));
    assert_eq!(sent[1].authorization(), None);
}
