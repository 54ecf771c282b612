//! HTTP handlers for roadmap, phase and item endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::adapters::http::projects::UserQuery;
use crate::application::handlers::roadmap::{
    CreateItemCommand, CreatePhaseCommand, CreateRoadmapCommand, GetRoadmapHandler, ItemHandlers,
    ListRoadmapsHandler, PhaseHandlers, RoadmapHandlers, UpdateItemCommand, UpdatePhaseCommand,
    UpdateRoadmapCommand,
};
use crate::domain::foundation::{ItemId, PhaseId, RoadmapId};

use super::dto::{
    CreateItemRequest, CreatePhaseRequest, CreateRoadmapRequest, ItemResponse, PhaseResponse,
    RoadmapResponse, UpdateItemRequest, UpdatePhaseRequest, UpdateRoadmapRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RoadmapsHandlers {
    roadmaps: Arc<RoadmapHandlers>,
    phases: Arc<PhaseHandlers>,
    items: Arc<ItemHandlers>,
    get: Arc<GetRoadmapHandler>,
    list: Arc<ListRoadmapsHandler>,
}

impl RoadmapsHandlers {
    pub fn new(
        roadmaps: Arc<RoadmapHandlers>,
        phases: Arc<PhaseHandlers>,
        items: Arc<ItemHandlers>,
        get: Arc<GetRoadmapHandler>,
        list: Arc<ListRoadmapsHandler>,
    ) -> Self {
        Self {
            roadmaps,
            phases,
            items,
            get,
            list,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Roadmap handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/roadmaps - Create a roadmap
pub async fn create_roadmap(
    State(handlers): State<RoadmapsHandlers>,
    Json(req): Json<CreateRoadmapRequest>,
) -> Response {
    let cmd = CreateRoadmapCommand {
        user_id: req.user_id,
        name: req.name,
        description: req.description,
    };

    match handlers.roadmaps.create(cmd).await {
        Ok(roadmap) => {
            (StatusCode::CREATED, Json(RoadmapResponse::from(&roadmap))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/roadmaps - List the user's roadmaps
pub async fn list_roadmaps(
    State(handlers): State<RoadmapsHandlers>,
    Query(query): Query<UserQuery>,
) -> Response {
    match handlers.list.handle(query.user_id).await {
        Ok(roadmaps) => {
            let body: Vec<RoadmapResponse> = roadmaps.iter().map(RoadmapResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/roadmaps/:id - Fetch a roadmap with its phase/item tree
pub async fn get_roadmap(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<RoadmapId>,
) -> Response {
    match handlers.get.handle(id).await {
        Ok(Some(roadmap)) => {
            (StatusCode::OK, Json(RoadmapResponse::from(&roadmap))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Roadmap", &id.to_string())),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/roadmaps/:id - Update a roadmap
pub async fn update_roadmap(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<RoadmapId>,
    Json(req): Json<UpdateRoadmapRequest>,
) -> Response {
    let cmd = UpdateRoadmapCommand {
        name: req.name,
        description: req.description,
    };

    match handlers.roadmaps.update(id, cmd).await {
        Ok(()) => match handlers.get.handle(id).await {
            Ok(Some(roadmap)) => {
                (StatusCode::OK, Json(RoadmapResponse::from(&roadmap))).into_response()
            }
            Ok(None) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found("Roadmap", &id.to_string())),
            )
                .into_response(),
            Err(e) => domain_error_response(e),
        },
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/roadmaps/:id - Delete a roadmap and its phases/items
pub async fn delete_roadmap(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<RoadmapId>,
) -> Response {
    match handlers.roadmaps.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Phase handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/roadmaps/:id/phases - Add a phase
pub async fn create_phase(
    State(handlers): State<RoadmapsHandlers>,
    Path(roadmap_id): Path<RoadmapId>,
    Json(req): Json<CreatePhaseRequest>,
) -> Response {
    let cmd = CreatePhaseCommand {
        roadmap_id,
        name: req.name,
        order_index: req.order_index,
    };

    match handlers.phases.create(cmd).await {
        Ok(phase) => (StatusCode::CREATED, Json(PhaseResponse::from(&phase))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/roadmaps/phases/:id - Update a phase
pub async fn update_phase(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<PhaseId>,
    Json(req): Json<UpdatePhaseRequest>,
) -> Response {
    let cmd = UpdatePhaseCommand {
        name: req.name,
        order_index: req.order_index,
    };

    match handlers.phases.update(id, cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/roadmaps/phases/:id - Delete a phase and its items
pub async fn delete_phase(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<PhaseId>,
) -> Response {
    match handlers.phases.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Item handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/roadmaps/phases/:id/items - Add an item to a phase
pub async fn create_item(
    State(handlers): State<RoadmapsHandlers>,
    Path(phase_id): Path<PhaseId>,
    Json(req): Json<CreateItemRequest>,
) -> Response {
    let cmd = CreateItemCommand {
        phase_id,
        name: req.name,
        status: req.status,
        order_index: req.order_index,
    };

    match handlers.items.create(cmd).await {
        Ok(item) => (StatusCode::CREATED, Json(ItemResponse::from(&item))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/roadmaps/items/:id - Update an item
pub async fn update_item(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<ItemId>,
    Json(req): Json<UpdateItemRequest>,
) -> Response {
    let cmd = UpdateItemCommand {
        name: req.name,
        status: req.status,
        order_index: req.order_index,
    };

    match handlers.items.update(id, cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/roadmaps/items/:id - Delete an item
pub async fn delete_item(
    State(handlers): State<RoadmapsHandlers>,
    Path(id): Path<ItemId>,
) -> Response {
    match handlers.items.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response(e),
    }
}
