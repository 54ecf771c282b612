//! Integration tests for the requirements document HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring end to end against in-memory
//! adapters: routing, path extraction, status mapping and DTO shapes.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use devplankit::adapters::ai::MockChatProvider;
use devplankit::adapters::http::{
    api_router, chat::ChatHandlers, conversations::ConversationsHandlers, ideas::IdeasHandlers,
    projects::ProjectsHandlers, requirements::requirements_routes,
    requirements::RequirementsHandlers, roadmaps::RoadmapsHandlers,
};
use devplankit::adapters::memory::{
    InMemoryConversationRepository, InMemoryIdeaRepository, InMemoryProjectRepository,
    InMemoryRoadmapRepository,
};
use devplankit::adapters::storage::InMemoryDocumentStore;
use devplankit::application::handlers::chat::StreamChatHandler;
use devplankit::application::handlers::conversation::{
    ConversationHandlers as ConversationUseCases, MessageHandlers,
};
use devplankit::application::handlers::document::{
    ApplySuggestionHandler, ExportDocumentHandler, LoadDocumentHandler, SaveDocumentHandler,
};
use devplankit::application::handlers::idea::{
    CreateIdeaHandler, DeleteIdeaHandler, ListIdeasHandler, UpdateIdeaHandler,
};
use devplankit::application::handlers::project::{
    CreateProjectHandler, DeleteProjectHandler, GetProjectHandler, ListProjectsHandler,
    UpdateProjectHandler,
};
use devplankit::application::handlers::roadmap::{
    GetRoadmapHandler, ItemHandlers, ListRoadmapsHandler, PhaseHandlers, RoadmapHandlers,
};
use devplankit::domain::foundation::{ProjectId, UserId};
use devplankit::domain::project::{Project, ProjectStatus, ProjectType};
use devplankit::ports::ProjectRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    store: Arc<InMemoryDocumentStore>,
    projects: Arc<InMemoryProjectRepository>,
}

fn requirements_app() -> TestApp {
    let store = Arc::new(InMemoryDocumentStore::new());
    let projects = Arc::new(InMemoryProjectRepository::new());

    let handlers = RequirementsHandlers::new(
        Arc::new(LoadDocumentHandler::new(store.clone())),
        Arc::new(SaveDocumentHandler::new(store.clone())),
        Arc::new(ApplySuggestionHandler::new()),
        Arc::new(ExportDocumentHandler::new(store.clone(), projects.clone())),
    );

    let router = Router::new().nest(
        "/api/projects/:project_id/requirements",
        requirements_routes(handlers),
    );

    TestApp {
        router,
        store,
        projects,
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn sample_project(user_id: UserId) -> Project {
    Project::new(
        ProjectId::new(),
        user_id,
        "My Cool App".to_string(),
        "A demo project".to_string(),
        ProjectStatus::Planning,
        ProjectType::Personal,
        None,
        None,
        vec!["rust".to_string()],
        vec![],
    )
    .unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn full_api_router_builds() {
    // Route conflicts panic at construction time, so building the complete
    // router with every module wired is a meaningful check on its own.
    let store = Arc::new(InMemoryDocumentStore::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let ideas = Arc::new(InMemoryIdeaRepository::new());
    let roadmaps = Arc::new(InMemoryRoadmapRepository::new());
    let conversations = Arc::new(InMemoryConversationRepository::new());
    let provider = Arc::new(MockChatProvider::new());

    let _router = api_router(
        ProjectsHandlers::new(
            Arc::new(CreateProjectHandler::new(projects.clone())),
            Arc::new(UpdateProjectHandler::new(projects.clone())),
            Arc::new(DeleteProjectHandler::new(projects.clone())),
            Arc::new(GetProjectHandler::new(projects.clone())),
            Arc::new(ListProjectsHandler::new(projects.clone())),
        ),
        RequirementsHandlers::new(
            Arc::new(LoadDocumentHandler::new(store.clone())),
            Arc::new(SaveDocumentHandler::new(store.clone())),
            Arc::new(ApplySuggestionHandler::new()),
            Arc::new(ExportDocumentHandler::new(store.clone(), projects.clone())),
        ),
        IdeasHandlers::new(
            Arc::new(CreateIdeaHandler::new(ideas.clone())),
            Arc::new(UpdateIdeaHandler::new(ideas.clone())),
            Arc::new(DeleteIdeaHandler::new(ideas.clone())),
            Arc::new(ListIdeasHandler::new(ideas)),
        ),
        RoadmapsHandlers::new(
            Arc::new(RoadmapHandlers::new(roadmaps.clone())),
            Arc::new(PhaseHandlers::new(roadmaps.clone())),
            Arc::new(ItemHandlers::new(roadmaps.clone())),
            Arc::new(GetRoadmapHandler::new(roadmaps.clone())),
            Arc::new(ListRoadmapsHandler::new(roadmaps)),
        ),
        ConversationsHandlers::new(
            Arc::new(ConversationUseCases::new(conversations.clone())),
            Arc::new(MessageHandlers::new(conversations)),
        ),
        ChatHandlers::new(Arc::new(StreamChatHandler::new(provider))),
    );
}

#[tokio::test]
async fn load_serves_template_when_nothing_stored() {
    let app = requirements_app();
    let uri = format!("/api/projects/{}/requirements", ProjectId::new());

    let (status, body) = send(app.router, get_request(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isTemplate"], true);
    assert!(body["content"]
        .as_str()
        .unwrap()
        .starts_with("# Requirements Document"));
}

#[tokio::test]
async fn create_then_conflict() {
    let app = requirements_app();
    let project_id = ProjectId::new();
    let uri = format!("/api/projects/{}/requirements", project_id);

    let (status, _) = send(
        app.router.clone(),
        json_request("POST", &uri, json!({"content": "# Doc"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app.router,
        json_request("POST", &uri, json!({"content": "# Doc again"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "SAVE_IN_FLIGHT");
}

#[tokio::test]
async fn save_upserts_document() {
    let app = requirements_app();
    let project_id = ProjectId::new();
    let uri = format!("/api/projects/{}/requirements", project_id);

    let (status, _) = send(
        app.router.clone(),
        json_request("PUT", &uri, json!({"content": "v1"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        app.router.clone(),
        json_request("PUT", &uri, json!({"content": "v2"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    use devplankit::ports::DocumentStore;
    assert_eq!(
        app.store.download(project_id).await.unwrap().as_deref(),
        Some("v2")
    );
}

#[tokio::test]
async fn apply_endpoint_applies_structured_edit() {
    let app = requirements_app();
    let uri = format!("/api/projects/{}/requirements/apply", ProjectId::new());

    let assistant_text = "Here you go:\n```json\n{\"action\": \"modify\", \"targetSection\": \"## Overview\", \"newContent\": \"Updated\"}\n```\nRewrote the overview.";
    let (status, body) = send(
        app.router,
        json_request(
            "POST",
            &uri,
            json!({
                "content": "# Requirements\n\n## Overview\nOld\n",
                "assistantText": assistant_text,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], true);
    assert_eq!(body["content"], "# Requirements\n\n## Overview\nUpdated\n");
    assert_eq!(body["explanation"], "Rewrote the overview.");
    assert_eq!(body["change"]["action"], "modify");
}

#[tokio::test]
async fn apply_endpoint_passes_discussion_through() {
    let app = requirements_app();
    let uri = format!("/api/projects/{}/requirements/apply", ProjectId::new());

    let (status, body) = send(
        app.router,
        json_request(
            "POST",
            &uri,
            json!({
                "content": "# Doc",
                "assistantText": "Consider splitting this into phases.",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], false);
    assert_eq!(body["content"], "# Doc");
    assert!(body.get("change").is_none());
}

#[tokio::test]
async fn export_returns_markdown_attachment() {
    let app = requirements_app();
    let user_id = UserId::new();
    let project = sample_project(user_id);
    app.projects.create(&project).await.unwrap();
    app.store.seed(project.id(), "# Exported Doc");

    let uri = format!("/api/projects/{}/requirements/export", project.id());
    let response = app.router.oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(
        disposition,
        "attachment; filename=\"requirements-my-cool-app.md\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"# Exported Doc");
}

#[tokio::test]
async fn export_missing_document_is_404() {
    let app = requirements_app();
    let uri = format!("/api/projects/{}/requirements/export", ProjectId::new());

    let (status, body) = send(app.router, get_request(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "DOCUMENT_NOT_FOUND");
}
