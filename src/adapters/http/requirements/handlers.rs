//! HTTP handlers for requirements document endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::document::{
    ApplySuggestionCommand, ApplySuggestionHandler, ExportDocumentHandler, LoadDocumentHandler,
    SaveDocumentHandler,
};
use crate::domain::foundation::ProjectId;

use super::dto::{
    ApplySuggestionRequest, ApplySuggestionResponse, DocumentResponse, SaveDocumentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RequirementsHandlers {
    load: Arc<LoadDocumentHandler>,
    save: Arc<SaveDocumentHandler>,
    apply: Arc<ApplySuggestionHandler>,
    export: Arc<ExportDocumentHandler>,
}

impl RequirementsHandlers {
    pub fn new(
        load: Arc<LoadDocumentHandler>,
        save: Arc<SaveDocumentHandler>,
        apply: Arc<ApplySuggestionHandler>,
        export: Arc<ExportDocumentHandler>,
    ) -> Self {
        Self {
            load,
            save,
            apply,
            export,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/projects/:project_id/requirements - Load the document
///
/// Serves the dated initial template when nothing is stored yet.
pub async fn load_document(
    State(handlers): State<RequirementsHandlers>,
    Path(project_id): Path<ProjectId>,
) -> Response {
    match handlers.load.handle(project_id).await {
        Ok(doc) => (StatusCode::OK, Json(DocumentResponse::from(doc))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/projects/:project_id/requirements - Create the document
///
/// Conflicts when a document already exists for the project.
pub async fn create_document(
    State(handlers): State<RequirementsHandlers>,
    Path(project_id): Path<ProjectId>,
    Json(req): Json<SaveDocumentRequest>,
) -> Response {
    match handlers.save.create(project_id, &req.content).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/projects/:project_id/requirements - Save the document (upsert)
pub async fn save_document(
    State(handlers): State<RequirementsHandlers>,
    Path(project_id): Path<ProjectId>,
    Json(req): Json<SaveDocumentRequest>,
) -> Response {
    match handlers.save.save(project_id, &req.content).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/projects/:project_id/requirements/apply - Apply an assistant
/// suggestion to the supplied document without persisting anything
pub async fn apply_suggestion(
    State(handlers): State<RequirementsHandlers>,
    Path(_project_id): Path<ProjectId>,
    Json(req): Json<ApplySuggestionRequest>,
) -> Response {
    let cmd = ApplySuggestionCommand {
        document: req.content,
        assistant_text: req.assistant_text,
    };

    match handlers.apply.handle(cmd) {
        Ok(result) => {
            (StatusCode::OK, Json(ApplySuggestionResponse::from(result))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/projects/:project_id/requirements/export - Download as markdown
pub async fn export_document(
    State(handlers): State<RequirementsHandlers>,
    Path(project_id): Path<ProjectId>,
) -> Response {
    match handlers.export.handle(project_id).await {
        Ok(exported) => {
            let disposition = format!("attachment; filename=\"{}\"", exported.filename);
            let mut response = (StatusCode::OK, exported.content).into_response();
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/markdown; charset=utf-8"),
            );
            if let Ok(value) = HeaderValue::from_str(&disposition) {
                response
                    .headers_mut()
                    .insert(header::CONTENT_DISPOSITION, value);
            }
            response
        }
        Err(e) => domain_error_response(e),
    }
}
