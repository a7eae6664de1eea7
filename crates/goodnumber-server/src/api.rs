//! Axum HTTP router: stateless planning endpoints.
//!
//! The planner is shared as `Arc<AppState>` across async handlers. Planning
//! runs on the blocking pool since large gaps mean a long DP sweep, and a
//! semaphore bounds how many sweeps hold memory at once.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | HTML page |
//! | POST | `/` | `{"ap": n}` -> target and action counts |
//! | GET | `/health` | Health check |
//!
//! [`app`] adds static files (`main.css`, `main.js`) and CORS on top.

use std::path::Path;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use goodnumber_core::Planner;
use tokio::sync::Semaphore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::dto::{ActionResponse, StatusRequest};
use crate::error::ApiError;
use crate::page::INDEX_HTML;

/// Default number of plans computed at the same time.
pub const DEFAULT_PLAN_LIMIT: usize = 4;

/// Shared handler state.
#[derive(Debug)]
pub struct AppState {
    planner: Planner,
    plan_slots: Arc<Semaphore>,
}

impl AppState {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            plan_slots: Arc::new(Semaphore::new(DEFAULT_PLAN_LIMIT)),
        }
    }

    /// Sets how many plans may run at once; at least one.
    pub fn with_plan_limit(mut self, limit: usize) -> Self {
        self.plan_slots = Arc::new(Semaphore::new(limit.max(1)));
        self
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn plan_slots(&self) -> &Semaphore {
        &self.plan_slots
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Planner::default())
    }
}

pub type SharedState = Arc<AppState>;

/// API routes only.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handle_index).post(handle_plan))
        .route("/health", get(handle_health_check))
        .with_state(state)
}

/// API routes plus static assets from `static_dir` and permissive CORS.
pub fn app(state: SharedState, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

// The body is parsed by hand so every malformed input maps to 400.
async fn handle_plan(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ActionResponse>, ApiError> {
    let request: StatusRequest = serde_json::from_slice(&body)?;
    let ap = request.ap;

    let permit = Arc::clone(&state.plan_slots)
        .acquire_owned()
        .await
        .map_err(|e| ApiError::Worker(e.to_string()))?;

    let plan = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        state.planner().plan(ap)
    })
    .await
    .map_err(|e| ApiError::Worker(e.to_string()))?
    .ok_or(ApiError::NoTarget(ap))?;

    info!(
        ap,
        target = plan.target,
        parts = plan.combination.total_parts(),
        "Plan served"
    );
    Ok(Json(ActionResponse::from_plan(&plan)))
}
