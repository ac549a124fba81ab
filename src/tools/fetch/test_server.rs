//! One-shot HTTP responder on localhost for exercising real reqwest round trips.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub(crate) enum Reply {
    /// Raw HTTP/1.1 response written after the request head arrives.
    Raw(String),
    /// Read the request, then keep the socket open without answering.
    Silent,
}

pub(crate) fn html_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

pub(crate) fn json_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve one connection. Returns the base URL and a handle yielding the
/// lowercased request head.
pub(crate) async fn serve_once(reply: Reply) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
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

        match reply {
            Reply::Raw(response) => {
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
            Reply::Silent => {
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            }
        }
        String::from_utf8_lossy(&head).to_lowercase()
    });

    (format!("http://{addr}"), handle)
}
