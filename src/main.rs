//! DevPlanKit server binary.
//!
//! Composition root: loads configuration, connects infrastructure, wires
//! adapters into application handlers and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use devplankit::adapters::ai::{MockChatProvider, OpenRouterConfig, OpenRouterProvider};
use devplankit::adapters::http::{
    api_router, chat::ChatHandlers, conversations::ConversationsHandlers, ideas::IdeasHandlers,
    projects::ProjectsHandlers, requirements::RequirementsHandlers, roadmaps::RoadmapsHandlers,
};
use devplankit::adapters::postgres::{
    PostgresConversationRepository, PostgresIdeaRepository, PostgresProjectRepository,
    PostgresRoadmapRepository,
};
use devplankit::adapters::storage::{
    LocalDocumentStore, SupabaseConfig, SupabaseDocumentStore,
};
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
use devplankit::config::{AppConfig, StorageBackend};
use devplankit::ports::{ChatProvider, DocumentStore};

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    config.validate().expect("Invalid configuration");

    tracing::info!(
        environment = ?config.server.environment,
        "Starting DevPlanKit server"
    );

    // Database
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to PostgreSQL");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run database migrations");
        tracing::info!("Database migrations applied");
    }

    // Repositories
    let projects = Arc::new(PostgresProjectRepository::new(pool.clone()));
    let ideas = Arc::new(PostgresIdeaRepository::new(pool.clone()));
    let roadmaps = Arc::new(PostgresRoadmapRepository::new(pool.clone()));
    let conversations = Arc::new(PostgresConversationRepository::new(pool.clone()));

    // Document store
    let store: Arc<dyn DocumentStore> = match config.storage.backend {
        StorageBackend::Supabase => {
            let supabase = SupabaseConfig::new(
                config.storage.supabase_url.clone().unwrap_or_default(),
                config
                    .storage
                    .supabase_service_key
                    .clone()
                    .unwrap_or_default(),
            )
            .with_bucket(config.storage.bucket.clone());
            Arc::new(SupabaseDocumentStore::new(supabase))
        }
        StorageBackend::Local => Arc::new(LocalDocumentStore::new(&config.storage.local_path)),
    };

    // Chat provider
    let provider: Arc<dyn ChatProvider> = if config.ai.use_mock {
        tracing::warn!("Using mock chat provider; responses are canned");
        Arc::new(MockChatProvider::new())
    } else {
        let ai = OpenRouterConfig::new(config.ai.openrouter_api_key.clone().unwrap_or_default())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout());
        Arc::new(OpenRouterProvider::new(ai))
    };

    // Application handlers
    let projects_handlers = ProjectsHandlers::new(
        Arc::new(CreateProjectHandler::new(projects.clone())),
        Arc::new(UpdateProjectHandler::new(projects.clone())),
        Arc::new(DeleteProjectHandler::new(projects.clone())),
        Arc::new(GetProjectHandler::new(projects.clone())),
        Arc::new(ListProjectsHandler::new(projects.clone())),
    );

    let requirements_handlers = RequirementsHandlers::new(
        Arc::new(LoadDocumentHandler::new(store.clone())),
        Arc::new(SaveDocumentHandler::new(store.clone())),
        Arc::new(ApplySuggestionHandler::new()),
        Arc::new(ExportDocumentHandler::new(store.clone(), projects.clone())),
    );

    let ideas_handlers = IdeasHandlers::new(
        Arc::new(CreateIdeaHandler::new(ideas.clone())),
        Arc::new(UpdateIdeaHandler::new(ideas.clone())),
        Arc::new(DeleteIdeaHandler::new(ideas.clone())),
        Arc::new(ListIdeasHandler::new(ideas.clone())),
    );

    let roadmaps_handlers = RoadmapsHandlers::new(
        Arc::new(RoadmapHandlers::new(roadmaps.clone())),
        Arc::new(PhaseHandlers::new(roadmaps.clone())),
        Arc::new(ItemHandlers::new(roadmaps.clone())),
        Arc::new(GetRoadmapHandler::new(roadmaps.clone())),
        Arc::new(ListRoadmapsHandler::new(roadmaps.clone())),
    );

    let conversations_handlers = ConversationsHandlers::new(
        Arc::new(ConversationUseCases::new(conversations.clone())),
        Arc::new(MessageHandlers::new(conversations.clone())),
    );

    let chat_handlers = ChatHandlers::new(Arc::new(StreamChatHandler::new(provider)));

    let app = api_router(
        projects_handlers,
        requirements_handlers,
        ideas_handlers,
        roadmaps_handlers,
        conversations_handlers,
        chat_handlers,
    )
    .layer(tower_http::timeout::TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let addr = config
        .server
        .socket_addr()
        .expect("Invalid server address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
