/// HTTP surface for the research service.
///
/// Routes:
/// - `POST /api/research`: research one item, returns a `ResearchResult`
/// - `GET /api/categories`: the category picker options
/// - `GET /healthz`: liveness plus the backend mode (live or demo)
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tracing::{info, warn};

use research_common::api::{CategoryOption, ItemCategory, ResearchResult, SearchInput};

use crate::error::AppError;
use crate::research::Researcher;

#[derive(Clone)]
pub struct AppState {
    researcher: Arc<Researcher>,
}

impl AppState {
    pub fn new(researcher: Researcher) -> Self {
        Self {
            researcher: Arc::new(researcher),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/research", post(research))
        .route("/api/categories", get(categories))
        .route("/healthz", get(health))
        .with_state(state)
}

async fn research(
    State(state): State<AppState>,
    payload: Result<Json<SearchInput>, JsonRejection>,
) -> Result<Json<ResearchResult>, AppError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected research request body");
        AppError::BadRequest(rejection.body_text())
    })?;

    let result = state.researcher.research(&input).await?;
    info!(
        item = %result.item_name,
        confidence = ?result.confidence.level,
        demo = state.researcher.is_demo(),
        "research request complete"
    );
    Ok(Json(result))
}

async fn categories() -> Json<Vec<CategoryOption>> {
    Json(ItemCategory::ALL.into_iter().map(ItemCategory::option).collect())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    mode: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        mode: if state.researcher.is_demo() { "demo" } else { "live" },
    })
}
