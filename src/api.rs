//! HTTP surface: liveness probes and the `/message` endpoint.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::honeypot::{Honeypot, InboundMessage, ResponseRecord};

/// Payload returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "Agentic Honeypot API is live!";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub honeypot: Arc<Honeypot>,
}

/// Build the Axum router.
pub fn honeypot_routes(honeypot: Arc<Honeypot>) -> Router {
    let state = AppState { honeypot };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/message", post(process_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Liveness ────────────────────────────────────────────────────────────

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": LIVENESS_MESSAGE }))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "honeypot"
    }))
}

// ── Message ─────────────────────────────────────────────────────────────

/// POST /message
///
/// Body rejections (bad JSON, missing or mistyped fields) become 422 before
/// the credential is looked at.
async fn process_message(
    State(state): State<AppState>,
    payload: Result<Json<InboundMessage>, JsonRejection>,
) -> Result<Json<ResponseRecord>, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected malformed message body");
        ApiError::from(rejection)
    })?;

    let record = state.honeypot.process_message(&input).map_err(|e| {
        warn!(conversation_id = %input.conversation_id, "Rejected message with invalid API key");
        ApiError::from(e)
    })?;

    let intel = &record.extracted_intelligence;
    info!(
        conversation_id = %input.conversation_id,
        scam_detected = record.scam_detected,
        turns = record.engagement_metrics.turns,
        bank_accounts = intel.bank_accounts.len(),
        upi_ids = intel.upi_ids.len(),
        phishing_urls = intel.phishing_urls.len(),
        "Processed message"
    );

    Ok(Json(record))
}
