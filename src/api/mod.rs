// HTTP API
// axum routes hosting the humanize pipeline

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{HumanizeRequest, HumanizeResponse};
use crate::services::{HttpParaphraseClient, HumanizeError, Humanizer};

pub struct AppState {
    pub humanizer: Humanizer<HttpParaphraseClient>,
}

impl AppState {
    pub fn new(humanizer: Humanizer<HttpParaphraseClient>) -> Self {
        Self { humanizer }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<HumanizeError> for ApiError {
    fn from(err: HumanizeError) -> Self {
        let status = match &err {
            HumanizeError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            HumanizeError::Segmentation(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/humanize", post(humanize))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

async fn humanize(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HumanizeRequest>,
) -> Result<Json<HumanizeResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let started = Instant::now();

    let result = state.humanizer.humanize(&req).await;

    match result {
        Ok(response) => {
            info!(
                %request_id,
                total_sentences = response.total_sentences,
                changed_sentences = response.changed_sentences,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "humanize.ok"
            );
            Ok(Json(response))
        }
        Err(err) => {
            warn!(%request_id, %err, "humanize.failed");
            Err(err.into())
        }
    }
}
