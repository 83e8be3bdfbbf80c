use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::RelayError;
use crate::relay::{ChatReply, ChatRequest};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(root))
        .route("/api/health", get(health_check))

        // Chat relay
        .route("/api/chat", post(chat))

        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ai_configured": state.relay.ai_configured(),
        "translator_configured": state.relay.translator_configured(),
        "request_timeout_secs": state.config.relay.request_timeout_secs,
    }))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected chat body: {}", rejection.body_text());
        RelayError::InvalidRequest("invalid request body".to_string())
    })?;

    let span = info_span!(
        "chat",
        request_id = %Uuid::new_v4(),
        lang = %request.resolved_lang()
    );
    let reply = state.relay.handle_chat(request).instrument(span).await?;
    Ok(Json(reply))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Request handler panicked: {}", details);
    RelayError::Internal("handler panicked".to_string()).into_response()
}
