//! End-to-end checks of the reqwest-backed session against a local server

use std::sync::Arc;

use gtrans::{AsyncTranslator, HttpSession, TranslationError, TranslatorConfig, Transport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const PAGE: &str = r#"<html><body>
<div class="input-container">
<input type="hidden" name="hl" value="en-US">
<input type="hidden" name="tl" value="fr-FR">
</div>
<div class="result-container">Bonjour &amp; bienvenue</div>
</body></html>"#;

/// Serve one response, handing back the raw request head
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    (format!("http://{}/m", addr), rx)
}

#[tokio::test]
async fn translate_over_http() {
    let (endpoint, request) = serve_once("200 OK", PAGE).await;
    let config = TranslatorConfig::new("en", "fr")
        .with_endpoint(endpoint)
        .with_user_agent("gtrans-test/1.0");

    let translator = AsyncTranslator::new(config).unwrap();
    let result = translator.translate("Hello & welcome").await.unwrap();

    assert_eq!(result.text(), "Bonjour & bienvenue");
    assert_eq!(result.source(), "en");
    assert_eq!(result.target(), "fr");

    let head = request.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /m?sl=en&tl=fr&q=Hello"));
    assert!(request_line.contains("%26"));
    assert!(head.to_lowercase().contains("user-agent: gtrans-test/1.0"));

    translator.close();
}

#[tokio::test]
async fn rate_limit_over_http() {
    let (endpoint, _request) = serve_once("429 Too Many Requests", "").await;
    let translator =
        AsyncTranslator::new(TranslatorConfig::new("auto", "en").with_endpoint(endpoint)).unwrap();

    assert!(matches!(
        translator.translate("Bonjour").await,
        Err(TranslationError::RateLimited)
    ));
}

#[tokio::test]
async fn server_error_over_http() {
    let (endpoint, _request) = serve_once("502 Bad Gateway", "upstream down").await;
    let translator =
        AsyncTranslator::new(TranslatorConfig::new("auto", "en").with_endpoint(endpoint)).unwrap();

    assert!(matches!(
        translator.translate("Bonjour").await,
        Err(TranslationError::RequestFailed { status: 502 })
    ));
}

#[tokio::test]
async fn detect_over_http() {
    let (endpoint, _request) = serve_once("200 OK", PAGE).await;
    let translator =
        AsyncTranslator::new(TranslatorConfig::new("auto", "fr").with_endpoint(endpoint)).unwrap();

    let detected = translator.detect("Hello").await.unwrap();
    assert_eq!(detected.name, "english");
    assert_eq!(detected.code, "en");
}

#[tokio::test]
async fn caller_session_stays_open() {
    let (endpoint, _request) = serve_once("200 OK", PAGE).await;
    let session = Arc::new(HttpSession::from_client(
        reqwest::Client::builder().no_proxy().build().unwrap(),
    ));
    let translator = AsyncTranslator::with_session(
        TranslatorConfig::new("en", "fr").with_endpoint(endpoint),
        session.clone(),
    )
    .unwrap();

    let text = translator
        .scoped(|t| async move { t.translate("Hello").await.map(|r| r.into_text()) })
        .await
        .unwrap();

    assert_eq!(text, "Bonjour & bienvenue");
    assert!(!session.is_closed());
}
