//! Shared fixtures for integration tests
//!
//! `TestServer` is a minimal HTTP/1.1 responder on a loopback port. Every
//! connection is answered once and closed; request lines are recorded.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

/// A running responder; stops when the runtime shuts down
pub struct TestServer {
    base: Url,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Start serving; `handler` maps (method, request target) to (status, body)
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str, &str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler = Arc::new(handler);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let handler = Arc::clone(&handler);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let _ = respond(stream, handler.as_ref(), &recorded).await;
                });
            }
        });

        Self {
            base: Url::parse(&format!("http://{}/", addr)).unwrap(),
            requests,
        }
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> Url {
        self.base.join(path).unwrap()
    }

    /// Request lines received so far, e.g. `GET /nuget/Packages() HTTP/1.1`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond<F>(
    stream: TcpStream,
    handler: &F,
    recorded: &Mutex<Vec<String>>,
) -> std::io::Result<()>
where
    F: Fn(&str, &str) -> (u16, String),
{
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    loop {
        let mut header = String::new();
        let n = reader.read_line(&mut header).await?;
        if n == 0 || header == "\r\n" {
            break;
        }
    }

    let request_line = request_line.trim_end().to_string();
    recorded.lock().unwrap().push(request_line.clone());

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let target = parts.next().unwrap_or_default();
    let (status, body) = handler(method, target);
    let body = if method == "HEAD" { String::new() } else { body };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    write_half.write_all(response.as_bytes()).await?;
    write_half.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// An OData verbose-format page
pub fn verbose_page(entries: &[(&str, &str)], next: Option<&str>) -> String {
    let results: Vec<serde_json::Value> = entries
        .iter()
        .map(|(id, version)| serde_json::json!({ "Id": id, "Version": version }))
        .collect();
    let mut d = serde_json::json!({ "results": results });
    if let Some(next) = next {
        d["__next"] = serde_json::Value::String(next.to_string());
    }
    serde_json::json!({ "d": d }).to_string()
}

/// An OData light-format page
pub fn light_page(entries: &[(&str, &str)]) -> String {
    let value: Vec<serde_json::Value> = entries
        .iter()
        .map(|(id, version)| serde_json::json!({ "Id": id, "Version": version }))
        .collect();
    serde_json::json!({ "value": value }).to_string()
}

/// A loopback URL with nothing listening on it
pub fn refused_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/nuget", addr)).unwrap()
}
