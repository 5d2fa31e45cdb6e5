//! End-to-end tests over real sockets, driving the accept loop with an
//! injected listener on an ephemeral port.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use tinyhttp::server::listener::serve;

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = serve(listener).await;
    });

    addr
}

/// Sends raw bytes and reads until the server closes the connection.
async fn roundtrip(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_get_root() {
    let addr = start_server().await;
    let response = roundtrip(addr, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n").await;

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\n\
          Content-Type: text/plain; charset=utf-8\r\n\
          Content-Length: 15\r\n\
          Connection: close\r\n\
          \r\n\
          hello tinyhttp\n"
            .to_vec()
    );
}

#[tokio::test]
async fn test_get_health() {
    let addr = start_server().await;
    let response = roundtrip(addr, b"GET /health HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("\r\nContent-Length: 3\r\n"));
    assert!(text.ends_with("\r\n\r\nok\n"));
}

#[tokio::test]
async fn test_get_unknown_path() {
    let addr = start_server().await;
    let response = roundtrip(addr, b"GET /nope HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();

    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.ends_with("\r\n\r\nnot found\n"));
}

#[tokio::test]
async fn test_post_is_rejected() {
    let addr = start_server().await;
    let response = roundtrip(addr, b"POST / HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();

    assert!(text.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(text.contains("\r\nAllow: GET\r\n"));
    assert!(text.ends_with("\r\n\r\nmethod not allowed\n"));
}

#[tokio::test]
async fn test_garbage_request_line() {
    let addr = start_server().await;
    let response = roundtrip(addr, b"GARBAGE\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();

    assert!(text.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(text.ends_with("\r\n\r\nbad request\n"));
}

#[tokio::test]
async fn test_empty_request_gets_no_response() {
    let addr = start_server().await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_identical_requests_get_identical_responses() {
    let addr = start_server().await;
    let request = b"GET /health HTTP/1.1\r\nHost: x\r\n\r\n";

    let first = roundtrip(addr, request).await;
    let second = roundtrip(addr, request).await;

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_over_long_request_is_truncated_not_fatal() {
    let addr = start_server().await;

    // Far more than fits in the single 4096-byte read. The server only sees
    // the first read's worth and closes with bytes still unread, which may
    // reset the connection under the client, so both write and read are
    // allowed to fail here.
    let request = format!("GET /{} HTTP/1.1\r\n\r\n", "a".repeat(5000));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let _ = stream.write_all(request.as_bytes()).await;

    let mut response = Vec::new();
    let _ = stream.read_to_end(&mut response).await;
    if response.len() >= 12 {
        // The truncated path is no known route.
        assert!(response.starts_with(b"HTTP/1.1 404"));
    }
    drop(stream);

    // The oversized request did not wedge the loop; the next client is
    // served normally.
    let response = roundtrip(addr, b"GET / HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn test_connections_are_served_one_after_another() {
    let addr = start_server().await;

    // The server recovers after a dropped connection and after an error
    // response; later clients still get served.
    let _ = roundtrip(addr, b"GARBAGE\r\n\r\n").await;

    let mut silent = TcpStream::connect(addr).await.unwrap();
    silent.shutdown().await.unwrap();
    drop(silent);

    let response = roundtrip(addr, b"GET / HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
}
