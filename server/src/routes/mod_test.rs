use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

fn test_state() -> AppState {
    let config = ServerConfig {
        port: 0,
        backend_url: "http://127.0.0.1:1".to_owned(),
        proxy_timeout_secs: 2,
    };
    AppState::new(&config).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = api_routes(test_state())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn paths_outside_api_are_not_proxied() {
    let resp = api_routes(test_state())
        .oneshot(Request::builder().uri("/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
