#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    extract::State,
    http::{
        HeaderMap, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use ouracli::{config::Settings, oura::personal_info::PERSONAL_INFO_PATH};

/// Local stand-in for the Oura API that answers every personal info request
/// with a fixed status and body.
#[derive(Clone)]
struct Stub {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    headers: Arc<Mutex<Vec<HeaderMap>>>,
}

pub struct Upstream {
    pub url: String,
    hits: Arc<AtomicUsize>,
    headers: Arc<Mutex<Vec<HeaderMap>>>,
}

impl Upstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// `Authorization` header of every request received so far.
    pub fn authorizations(&self) -> Vec<String> {
        self.header_values(AUTHORIZATION.as_str())
    }

    pub fn header_values(&self, name: &str) -> Vec<String> {
        self.headers
            .lock()
            .unwrap()
            .iter()
            .filter_map(|h| h.get(name).and_then(|v| v.to_str().ok()).map(String::from))
            .collect()
    }
}

async fn personal_info(
    State(stub): State<Stub>,
    headers: HeaderMap,
) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], String) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    stub.headers.lock().unwrap().push(headers);
    (
        stub.status,
        [(CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

pub async fn spawn_upstream(status: u16, body: &str) -> Upstream {
    let stub = Stub {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
        hits: Arc::new(AtomicUsize::new(0)),
        headers: Arc::new(Mutex::new(Vec::new())),
    };
    let upstream = Upstream {
        url: String::new(),
        hits: Arc::clone(&stub.hits),
        headers: Arc::clone(&stub.headers),
    };

    let app = Router::new()
        .route(PERSONAL_INFO_PATH, get(personal_info))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Upstream {
        url: format!("http://{}", addr),
        ..upstream
    }
}

/// Base URL on which nothing is listening.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn settings(api_url: &str, fallback: Option<&str>) -> Settings {
    let mut vars = HashMap::new();
    vars.insert("OURA_API_URL", api_url.to_string());
    if let Some(token) = fallback {
        vars.insert("OURA_PAT", token.to_string());
    }
    Settings::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Client that talks to the local stub directly even if a proxy is set in
/// the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Upstream that announces a longer body than it sends, then hangs up.
pub async fn spawn_truncated_upstream() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"id\":\"u1\"",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{}", addr)
}
