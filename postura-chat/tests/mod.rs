use postura_chat::{ChatRelay, FALLBACK_REPLY, RelayClient, parse_reply};
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Reply Parsing Tests
// ============================================================================

#[test]
fn test_parse_reply_success() {
    let reply = parse_reply(StatusCode::OK, r#"{"response": "  Sit tall!  "}"#).unwrap();
    assert_eq!(reply, "Sit tall!");
}

#[test]
fn test_parse_reply_error_body_fails_even_on_200() {
    let result = parse_reply(StatusCode::OK, r#"{"error": "model offline"}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("model offline"));
}

#[test]
fn test_parse_reply_non_success_status() {
    let result = parse_reply(StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_parse_reply_non_json_body() {
    assert!(parse_reply(StatusCode::OK, "<html>nope</html>").is_err());
}

#[test]
fn test_parse_reply_missing_response_field() {
    assert!(parse_reply(StatusCode::OK, r#"{"ok": true}"#).is_err());
}

// ============================================================================
// Relay Client Tests
// ============================================================================

/// Serve one canned HTTP response on a local port.
async fn canned_server(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        // Consume the whole request (headers + declared body) before
        // answering, so the client never sees a reset mid-write.
        let mut buf = vec![0u8; 8192];
        let mut seen = 0;
        let mut needed = None;
        loop {
            let n = stream.read(&mut buf[seen..]).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            seen += n;
            if needed.is_none() {
                if let Some(end) = buf[..seen].windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    needed = Some(end + 4 + length);
                }
            }
            if let Some(needed) = needed {
                if seen >= needed {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
    });
    format!("http://{}/api/chat", addr)
}

#[tokio::test]
async fn test_send_round_trip() {
    let endpoint = canned_server("200 OK", r#"{"response": "Keep your shoulders back."}"#).await;
    let client = RelayClient::new(&endpoint);

    let reply = client.send("any tips?").await.unwrap();
    assert_eq!(reply, "Keep your shoulders back.");
}

#[tokio::test]
async fn test_send_surfaces_relay_error_body() {
    let endpoint = canned_server("200 OK", r#"{"error": "no posture data yet"}"#).await;
    let client = RelayClient::new(&endpoint);

    let err = client.send("how am I doing?").await.unwrap_err();
    assert!(err.to_string().contains("no posture data yet"));
}

#[tokio::test]
async fn test_send_or_fallback_on_unreachable_relay() {
    // Nothing listens here; the request must fail.
    let client = RelayClient::new("http://127.0.0.1:1/api/chat");

    let reply = client.send_or_fallback("hello?").await;
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_send_or_fallback_on_server_error() {
    let endpoint = canned_server("500 Internal Server Error", "boom").await;
    let client = RelayClient::new(&endpoint);

    let reply = client.send_or_fallback("hello?").await;
    assert_eq!(reply, FALLBACK_REPLY);
}
