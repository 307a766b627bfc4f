//! Axum route handlers for the Template API.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::templates::{self, Template};

#[derive(Debug, Deserialize)]
pub struct ListTemplatesQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub template_id: String,
}

/// GET /api/v1/templates?category=modern
///
/// Lists the catalog, optionally filtered by category. An unknown category
/// yields an empty list, not an error.
pub async fn handle_list(
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<Vec<Template>>, AppError> {
    let templates = match query.category.as_deref() {
        Some(category) => templates::by_category(category).into_iter().cloned().collect(),
        None => templates::all().to_vec(),
    };
    Ok(Json(templates))
}

/// GET /api/v1/templates/:id
///
/// Strict lookup — unknown ids 404 here, unlike the renderer's defaulting
/// resolution.
pub async fn handle_get(Path(id): Path<String>) -> Result<Json<Template>, AppError> {
    templates::find(&id)
        .map(|t| Json(t.clone()))
        .ok_or_else(|| AppError::NotFound(format!("template '{id}' does not exist")))
}

/// POST /api/v1/templates/recommend
///
/// Advisory template recommendation from a job description; the client must
/// confirm before applying it.
pub async fn handle_recommend(
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    Ok(Json(RecommendResponse {
        template_id: templates::recommend(&request.job_description).to_string(),
    }))
}
