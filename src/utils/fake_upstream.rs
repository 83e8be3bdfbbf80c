//! In-process HTTP upstreams for tests.

use axum::{
    http::{header, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

type Responder = dyn Fn(&Value) -> (StatusCode, String) + Send + Sync;

/// A local server that records every JSON body it receives and answers
/// through a caller-supplied function.
pub struct FakeUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeUpstream {
    pub async fn spawn<F>(respond: F) -> Self
    where
        F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Responder> = Arc::new(respond);

        let recorded = requests.clone();
        let app = Router::new().fallback(move |body: String| {
            let recorded = recorded.clone();
            let respond = respond.clone();
            async move {
                let value: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
                let (status, reply) = respond(&value);
                recorded.lock().unwrap().push(value);
                (status, [(header::CONTENT_TYPE, "application/json")], reply)
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/api", addr),
            requests,
        }
    }

    /// Always answers 200 with `body`.
    pub async fn replying(body: &str) -> Self {
        let body = body.to_string();
        Self::spawn(move |_| (StatusCode::OK, body.clone())).await
    }

    /// Always answers with `status` and an error body.
    pub async fn failing(status: StatusCode) -> Self {
        Self::spawn(move |_| (status, r#"{"error":"boom"}"#.to_string())).await
    }

    /// A translator that tags text with its target: `[ta] Hello`.
    pub async fn tagging_translator() -> Self {
        Self::spawn(|request| {
            let text = request["q"].as_str().unwrap_or_default();
            let target = request["target"].as_str().unwrap_or_default();
            let body = serde_json::json!({ "translatedText": format!("[{}] {}", target, text) });
            (StatusCode::OK, body.to_string())
        })
        .await
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// A URL that accepts connections and never answers.
pub async fn silent_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/api", addr)
}
