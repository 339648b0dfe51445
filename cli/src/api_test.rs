use super::*;

#[test]
fn new_rejects_non_http_base_urls() {
    for raw in ["not a url", "ftp://files.example.test/api"] {
        assert!(matches!(ApiClient::new(raw, None), Err(CliError::InvalidBaseUrl(_))), "{raw}");
    }
}

#[test]
fn url_joins_base_and_endpoint() {
    let api = ApiClient::new("http://localhost:5000/api/", None).unwrap();
    assert_eq!(api.url(endpoints::LOGIN), "http://localhost:5000/api/auth/login");
    assert_eq!(api.url(&endpoints::share("q1")), "http://localhost:5000/api/qrcodes/q1/share");
}

#[test]
fn status_error_prefers_backend_message() {
    let err = status_error(400, r#"{"message":"Invalid credentials"}"#);
    assert!(matches!(err, CliError::Status { status: 400, ref message } if message == "Invalid credentials"));
}

#[test]
fn status_error_falls_back_for_unauthorized() {
    let err = status_error(401, "");
    assert_eq!(err.to_string(), "server returned HTTP 401: not authorized; run `qrcodes login` again");
}

#[test]
fn status_error_falls_back_for_other_failures() {
    let err = status_error(500, "<html>oops</html>");
    assert_eq!(err.to_string(), "server returned HTTP 500: request failed");
}
