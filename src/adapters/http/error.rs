//! Shared HTTP error response and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wire shape for all error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code (SCREAMING_SNAKE_CASE).
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Convenience for 404 responses.
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource, id))
    }
}

/// Maps a domain error to an HTTP response.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = status_for(err.code);
    let body = ErrorResponse::new(err.code.to_string(), err.message);
    (status, Json(body)).into_response()
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::ProjectNotFound
        | ErrorCode::IdeaNotFound
        | ErrorCode::RoadmapNotFound
        | ErrorCode::PhaseNotFound
        | ErrorCode::ItemNotFound
        | ErrorCode::ConversationNotFound
        | ErrorCode::DocumentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition | ErrorCode::SaveInFlight => StatusCode::CONFLICT,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorCode::AIProviderError => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_codes_map_to_404() {
        assert_eq!(status_for(ErrorCode::ProjectNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::DocumentNotFound),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_maps_to_400_and_conflict_to_409() {
        assert_eq!(
            status_for(ErrorCode::ValidationFailed),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(ErrorCode::SaveInFlight), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_codes_map_to_5xx() {
        assert_eq!(
            status_for(ErrorCode::AIProviderError),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(ErrorCode::StorageError),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
