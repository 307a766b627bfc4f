//! Axum route handlers for the Document API.
//!
//! Value-in/value-out: every request carries the document as a plain
//! serializable record and gets the new value back. Serde rejects malformed
//! section types and item shapes at this boundary, before any operation runs.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::document::{apply_op, create_empty, validate, DocumentOp, ValidationReport};
use crate::errors::AppError;
use crate::models::document::Document;
use crate::render::{render, VisualDocument};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplyOpRequest {
    pub document: Document,
    pub op: DocumentOp,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: Document,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWithTemplateRequest {
    pub document: Document,
    /// Overrides the document's own template when present.
    pub template_id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents
///
/// Creates an empty document seeded with the experience, education and skills
/// sections for the given template.
pub async fn handle_create(
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    Ok(Json(DocumentResponse {
        document: create_empty(&request.template_id),
    }))
}

/// POST /api/v1/documents/ops
///
/// Applies one edit command and returns the new document value. Reorder
/// indices from the wire are clamped, not trusted.
pub async fn handle_apply_op(
    Json(request): Json<ApplyOpRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    Ok(Json(DocumentResponse {
        document: apply_op(&request.document, &request.op),
    }))
}

/// POST /api/v1/documents/validate
///
/// Explicit validation pass against the target template's requirements.
/// Failures come back as data, never as an HTTP error.
pub async fn handle_validate(
    Json(request): Json<DocumentWithTemplateRequest>,
) -> Result<Json<ValidationReport>, AppError> {
    let template_id = request
        .template_id
        .unwrap_or_else(|| request.document.template_id.clone());
    Ok(Json(validate(&request.document, &template_id)))
}

/// POST /api/v1/documents/render
///
/// Pure projection to the visual tree; safe to call on every keystroke.
pub async fn handle_render(
    Json(request): Json<DocumentWithTemplateRequest>,
) -> Result<Json<VisualDocument>, AppError> {
    let template_id = request
        .template_id
        .unwrap_or_else(|| request.document.template_id.clone());
    Ok(Json(render(&request.document, &template_id)))
}
