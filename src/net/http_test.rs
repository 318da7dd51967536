use super::*;

#[test]
fn anonymous_config_has_no_headers() {
    let config = RequestConfig::anonymous();
    assert!(config.headers().is_empty());
    assert_eq!(config.authorization(), None);
}

#[test]
fn token_config_uses_token_scheme() {
    let config = RequestConfig::with_token("abc123");
    assert_eq!(config.authorization(), Some("Token abc123"));
    assert_eq!(config.headers().len(), 1);
}

#[test]
fn response_success_range() {
    let ok = HttpResponse { status: 201, body: serde_json::Value::Null };
    let redirect = HttpResponse { status: 302, body: serde_json::Value::Null };
    let bad = HttpResponse { status: 400, body: serde_json::Value::Null };
    assert!(ok.is_success());
    assert!(!redirect.is_success());
    assert!(!bad.is_success());
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn browser_transport_is_unavailable_off_browser() {
    let transport = BrowserTransport;
    let result = transport.get("/api/projects/", &RequestConfig::anonymous()).await;
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
