#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    Router,
};
use contributors_gallery::config::ProxyConfig;
use contributors_gallery::proxy::{router, AppState};
use std::sync::{Arc, Mutex};

/// Request observed by the mock upstream
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub accept: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stand-in for the GitHub API, answering every request with one canned response
pub struct MockUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.into(),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(respond).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(MockUpstream {
            base_url: format!("http://{}", addr),
            requests,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn proxy_config(&self, token: Option<&str>) -> ProxyConfig {
        ProxyConfig::new(5000, &self.base_url, token.map(str::to_string))
            .expect("mock upstream URL is valid")
    }

    pub fn proxy_router(&self) -> Router {
        let state = AppState::new(&self.proxy_config(None)).expect("Failed to create proxy state");
        router(state)
    }
}

async fn respond(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let read = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        accept: read(header::ACCEPT),
        authorization: read(header::AUTHORIZATION),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Serve a router on an ephemeral port and return its base URL
pub async fn spawn_router(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{}", addr))
}

/// Address nothing is listening on
pub async fn closed_address() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

pub fn upstream_contributors_json() -> String {
    serde_json::json!([
        {
            "login": "octocat",
            "id": 583231,
            "node_id": "MDQ6VXNlcjU4MzIzMQ==",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "type": "User",
            "site_admin": false,
            "contributions": 32
        },
        {
            "login": "hubot",
            "id": 480938,
            "node_id": "MDQ6VXNlcjQ4MDkzOA==",
            "avatar_url": "https://avatars.githubusercontent.com/u/480938?v=4",
            "html_url": "https://github.com/hubot",
            "type": "User",
            "site_admin": false,
            "contributions": 1
        }
    ])
    .to_string()
}
