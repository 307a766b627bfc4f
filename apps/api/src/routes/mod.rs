pub mod documents;
pub mod health;
pub mod templates;
pub mod workflows;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route("/api/v1/documents", post(documents::handle_create))
        .route("/api/v1/documents/ops", post(documents::handle_apply_op))
        .route(
            "/api/v1/documents/validate",
            post(documents::handle_validate),
        )
        .route("/api/v1/documents/render", post(documents::handle_render))
        // Template API
        .route("/api/v1/templates", get(templates::handle_list))
        .route("/api/v1/templates/:id", get(templates::handle_get))
        .route(
            "/api/v1/templates/recommend",
            post(templates::handle_recommend),
        )
        // Workflow API
        .route("/api/v1/workflows/manual", post(workflows::handle_manual))
        .route("/api/v1/workflows/ai", post(workflows::handle_ai_assisted))
        .route("/api/v1/workflows/import", post(workflows::handle_import))
        .with_state(state)
}
