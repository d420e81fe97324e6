//! HTTP client error-normalization tests against a local TCP stub.
//!
//! The stub speaks just enough HTTP/1.1 to script one response per
//! connection; no mock-server crate needed.

use paylite_sdk::error::HttpError;
use paylite_sdk::http::HttpClient;

use serde::Deserialize;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Deserialize, PartialEq)]
struct Echo {
    ok: bool,
}

/// Serve one connection with a canned response, returning the base URL and
/// the raw request the client sent.
async fn stub_once(status_line: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn not_found_maps_to_api_error_with_body_message() {
    let (base, _handle) = stub_once("404 Not Found", r#"{"message":"Not found"}"#).await;
    let client = HttpClient::new(&base, Duration::from_secs(5), None);

    let err = client.get::<Echo>("/missing", None).await.unwrap_err();
    match err {
        HttpError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_without_message_uses_generic_fallback() {
    let (base, _handle) = stub_once("500 Internal Server Error", "boom").await;
    let client = HttpClient::new(&base, Duration::from_secs(5), None);

    let err = client.get::<Echo>("/broken", None).await.unwrap_err();
    match err {
        HttpError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Something went wrong. Please try again");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_maps_to_generic_network_error() {
    // Bind then drop so the port is known-dead.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpClient::new(
        &format!("http://{}", addr),
        Duration::from_secs(5),
        None,
    );
    let err = client.get::<Echo>("/anything", None).await.unwrap_err();
    match err {
        HttpError::Network { .. } => {
            // Raw transport detail must not leak into the user-facing message.
            assert!(!err.to_string().contains("127.0.0.1"));
        }
        other => panic!("expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn slow_server_maps_to_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        // Accept and stall; never respond.
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
        drop(socket);
    });

    let client = HttpClient::new(
        &format!("http://{}", addr),
        Duration::from_millis(200),
        None,
    );
    let err = client.get::<Echo>("/slow", None).await.unwrap_err();
    assert!(matches!(err, HttpError::Timeout));
}

#[tokio::test]
async fn success_body_is_decoded() {
    let (base, _handle) = stub_once("200 OK", r#"{"ok":true}"#).await;
    let client = HttpClient::new(&base, Duration::from_secs(5), None);

    let echo: Echo = client.get("/ping", None).await.unwrap();
    assert_eq!(echo, Echo { ok: true });
}

#[tokio::test]
async fn malformed_success_body_maps_to_decode_error() {
    let (base, _handle) = stub_once("200 OK", "not json at all").await;
    let client = HttpClient::new(&base, Duration::from_secs(5), None);

    let err = client.get::<Echo>("/ping", None).await.unwrap_err();
    assert!(matches!(err, HttpError::Decode(_)));
}

#[tokio::test]
async fn stored_token_rides_as_bearer_header() {
    let (base, handle) = stub_once("200 OK", r#"{"ok":true}"#).await;
    let client = HttpClient::new(&base, Duration::from_secs(5), Some("tok_1".to_string()));

    let _: Echo = client.get("/me", None).await.unwrap();
    let request = handle.await.unwrap();
    assert!(request.contains("authorization: Bearer tok_1")
        || request.contains("Authorization: Bearer tok_1"));
}

#[tokio::test]
async fn token_override_wins_over_stored_token() {
    let (base, handle) = stub_once("200 OK", r#"{"ok":true}"#).await;
    let client = HttpClient::new(&base, Duration::from_secs(5), Some("tok_1".to_string()));

    let _: Echo = client.get("/refresh", Some("tok_override")).await.unwrap();
    let request = handle.await.unwrap();
    assert!(request.contains("Bearer tok_override"));
    assert!(!request.contains("Bearer tok_1"));
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let (base, handle) = stub_once("200 OK", r#"{"ok":true}"#).await;
    let client = HttpClient::new(&base, Duration::from_secs(5), None);

    let _: Echo = client.get("/public", None).await.unwrap();
    let request = handle.await.unwrap().to_lowercase();
    assert!(!request.contains("authorization:"));
}
