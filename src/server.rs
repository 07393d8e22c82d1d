//! REST intake surface for the orchestrator.
//!
//! Thin transport shell around the pipeline: the dashboard POSTs contact
//! form submissions here and reads back per-customer status and aggregate
//! metrics. No decision logic lives in this module.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

use crate::inquiry::{Category, Inquiry, Urgency};
use crate::pipeline::engine::OrchestrationEngine;
use crate::status::StatusRegistry;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<OrchestrationEngine>,
    pub registry: Arc<StatusRegistry>,
}

/// Build the Axum router for the intake surface.
pub fn intake_routes(engine: Arc<OrchestrationEngine>, registry: Arc<StatusRegistry>) -> Router {
    let state = AppState { engine, registry };

    Router::new()
        .route("/health", get(health))
        .route("/api/inquiries", post(submit_inquiry))
        .route("/api/inquiries/{email}/status", get(customer_status))
        .route("/api/metrics", get(metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Intake payload ──────────────────────────────────────────────────

/// Contact form submission. The server assigns the ID and receive time.
#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub subject: String,
    pub message: String,
    #[serde(default = "default_category")]
    pub category: Category,
    #[serde(default = "default_urgency")]
    pub urgency: Urgency,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

fn default_category() -> Category {
    Category::Other
}

fn default_urgency() -> Urgency {
    Urgency::Medium
}

impl IntakeRequest {
    fn into_inquiry(self) -> Inquiry {
        Inquiry {
            id: Uuid::new_v4(),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            subject: self.subject,
            message: self.message,
            category: self.category,
            urgency: self.urgency,
            budget: self.budget,
            timeline: self.timeline,
            company: self.company,
            phone: self.phone,
            received_at: Utc::now(),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "inquiry-flow"
    }))
}

async fn submit_inquiry(
    State(state): State<AppState>,
    Json(request): Json<IntakeRequest>,
) -> impl IntoResponse {
    let inquiry = request.into_inquiry();
    info!(inquiry_id = %inquiry.id, category = %inquiry.category, "Inquiry received");

    let result = state.engine.run(&inquiry).await;

    // A Failed run means the submission itself was unusable.
    let code = if result.success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (code, Json(result))
}

async fn customer_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    match state.registry.status_for(&email).await {
        Some(status) => (StatusCode::OK, Json(serde_json::json!(status))),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "no automation recorded for customer" })),
        ),
    }
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.metrics().await)
}
