use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn overrides_are_parsed_and_trailing_slash_dropped() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("QR_BACKEND_URL", "https://qr.example.test/"),
        ("QR_PROXY_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://qr.example.test");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn blank_backend_url_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("QR_BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn non_http_backend_url_is_rejected() {
    for raw in ["not a url", "backend:5000/api", "ftp://files.example.test"] {
        let err = ServerConfig::from_lookup(lookup(&[("QR_BACKEND_URL", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "QR_BACKEND_URL", .. }), "{raw}");
    }
}

#[test]
fn zero_timeout_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("QR_PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "QR_PROXY_TIMEOUT_SECS", .. }));
}
