//! HTTP handlers for idea endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::adapters::http::projects::UserQuery;
use crate::application::handlers::idea::{
    CreateIdeaCommand, CreateIdeaHandler, DeleteIdeaHandler, ListIdeasHandler, UpdateIdeaCommand,
    UpdateIdeaHandler,
};
use crate::domain::foundation::IdeaId;

use super::dto::{CreateIdeaRequest, IdeaResponse, UpdateIdeaRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct IdeasHandlers {
    create: Arc<CreateIdeaHandler>,
    update: Arc<UpdateIdeaHandler>,
    delete: Arc<DeleteIdeaHandler>,
    list: Arc<ListIdeasHandler>,
}

impl IdeasHandlers {
    pub fn new(
        create: Arc<CreateIdeaHandler>,
        update: Arc<UpdateIdeaHandler>,
        delete: Arc<DeleteIdeaHandler>,
        list: Arc<ListIdeasHandler>,
    ) -> Self {
        Self {
            create,
            update,
            delete,
            list,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/ideas - Capture an idea
pub async fn create_idea(
    State(handlers): State<IdeasHandlers>,
    Json(req): Json<CreateIdeaRequest>,
) -> Response {
    let cmd = CreateIdeaCommand {
        user_id: req.user_id,
        title: req.title,
        description: req.description,
    };

    match handlers.create.handle(cmd).await {
        Ok(idea) => (StatusCode::CREATED, Json(IdeaResponse::from(&idea))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/ideas - List the user's ideas, newest first
pub async fn list_ideas(
    State(handlers): State<IdeasHandlers>,
    Query(query): Query<UserQuery>,
) -> Response {
    match handlers.list.handle(query.user_id).await {
        Ok(ideas) => {
            let body: Vec<IdeaResponse> = ideas.iter().map(IdeaResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/ideas/:id - Edit an idea
pub async fn update_idea(
    State(handlers): State<IdeasHandlers>,
    Path(id): Path<IdeaId>,
    Json(req): Json<UpdateIdeaRequest>,
) -> Response {
    let cmd = UpdateIdeaCommand {
        title: req.title,
        description: req.description,
    };

    match handlers.update.handle(id, cmd).await {
        Ok(idea) => (StatusCode::OK, Json(IdeaResponse::from(&idea))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/ideas/:id - Delete an idea
pub async fn delete_idea(
    State(handlers): State<IdeasHandlers>,
    Path(id): Path<IdeaId>,
) -> Response {
    match handlers.delete.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
