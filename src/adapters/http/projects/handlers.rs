//! HTTP handlers for project endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::handlers::project::{
    CreateProjectCommand, CreateProjectHandler, DeleteProjectHandler, GetProjectHandler,
    ListProjectsHandler, UpdateProjectCommand, UpdateProjectHandler,
};
use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectChanges;

use super::dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest, UserQuery};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProjectsHandlers {
    create: Arc<CreateProjectHandler>,
    update: Arc<UpdateProjectHandler>,
    delete: Arc<DeleteProjectHandler>,
    get: Arc<GetProjectHandler>,
    list: Arc<ListProjectsHandler>,
}

impl ProjectsHandlers {
    pub fn new(
        create: Arc<CreateProjectHandler>,
        update: Arc<UpdateProjectHandler>,
        delete: Arc<DeleteProjectHandler>,
        get: Arc<GetProjectHandler>,
        list: Arc<ListProjectsHandler>,
    ) -> Self {
        Self {
            create,
            update,
            delete,
            get,
            list,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/projects - Create a project
pub async fn create_project(
    State(handlers): State<ProjectsHandlers>,
    Json(req): Json<CreateProjectRequest>,
) -> Response {
    let cmd = CreateProjectCommand {
        user_id: req.user_id,
        name: req.name,
        description: req.description,
        status: req.status,
        project_type: req.project_type,
        production_url: req.production_url,
        repository_url: req.repository_url,
        tech_stack: req.tech_stack,
        extra_urls: req.extra_urls,
    };

    match handlers.create.handle(cmd).await {
        Ok(project) => {
            (StatusCode::CREATED, Json(ProjectResponse::from(&project))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/projects - List the user's projects
pub async fn list_projects(
    State(handlers): State<ProjectsHandlers>,
    Query(query): Query<UserQuery>,
) -> Response {
    match handlers.list.handle(query.user_id).await {
        Ok(projects) => {
            let body: Vec<ProjectResponse> = projects.iter().map(ProjectResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/projects/:id - Fetch one project
pub async fn get_project(
    State(handlers): State<ProjectsHandlers>,
    Path(id): Path<ProjectId>,
) -> Response {
    match handlers.get.handle(id).await {
        Ok(Some(project)) => (StatusCode::OK, Json(ProjectResponse::from(&project))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Project", &id.to_string())),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/projects/:id - Update a project
pub async fn update_project(
    State(handlers): State<ProjectsHandlers>,
    Path(id): Path<ProjectId>,
    Json(req): Json<UpdateProjectRequest>,
) -> Response {
    let cmd = UpdateProjectCommand {
        changes: ProjectChanges {
            name: req.name,
            description: req.description,
            status: req.status,
            project_type: req.project_type,
            production_url: req.production_url,
            repository_url: req.repository_url,
            tech_stack: req.tech_stack,
            extra_urls: req.extra_urls,
        },
    };

    match handlers.update.handle(id, cmd).await {
        Ok(project) => (StatusCode::OK, Json(ProjectResponse::from(&project))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/projects/:id - Delete a project
pub async fn delete_project(
    State(handlers): State<ProjectsHandlers>,
    Path(id): Path<ProjectId>,
) -> Response {
    match handlers.delete.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
