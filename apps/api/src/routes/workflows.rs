//! Axum route handlers for the three entry workflows.
//!
//! Each handler returns the initial document for its mode; all subsequent
//! editing goes through the Document API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::CvDraftRequest;
use crate::errors::AppError;
use crate::models::document::Document;
use crate::state::AppState;
use crate::workflow;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualRequest {
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssistedRequest {
    pub template_id: String,
    #[serde(flatten)]
    pub input: CvDraftRequest,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub template_id: String,
    pub resume_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct WorkflowResponse {
    pub document: Document,
}

/// POST /api/v1/workflows/manual
pub async fn handle_manual(
    Json(request): Json<ManualRequest>,
) -> Result<Json<WorkflowResponse>, AppError> {
    Ok(Json(WorkflowResponse {
        document: workflow::start_manual(&request.template_id),
    }))
}

/// POST /api/v1/workflows/ai
///
/// One text-analysis call; on failure nothing is produced and the client may
/// retry or fall back to manual entry.
pub async fn handle_ai_assisted(
    State(state): State<AppState>,
    Json(request): Json<AiAssistedRequest>,
) -> Result<Json<WorkflowResponse>, AppError> {
    let document = workflow::start_ai_assisted(
        state.analyzer.as_ref(),
        &request.template_id,
        &request.input,
    )
    .await?;
    Ok(Json(WorkflowResponse { document }))
}

/// POST /api/v1/workflows/import
pub async fn handle_import(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> Result<Json<WorkflowResponse>, AppError> {
    let document = workflow::start_import(
        state.resumes.as_ref(),
        &request.template_id,
        request.resume_id,
    )
    .await?;
    Ok(Json(WorkflowResponse { document }))
}
