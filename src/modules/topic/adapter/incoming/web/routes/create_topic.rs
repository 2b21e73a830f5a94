use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::topic_dto::TopicResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    /// Topic name, at most 200 characters
    #[schema(example = "Chess")]
    pub text: String,

    /// Whether anonymous visitors and other users may read this topic
    #[serde(default)]
    #[schema(example = false)]
    pub is_public: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a topic
///
/// Creates a topic owned by the authenticated user. Topics are private unless
/// `is_public` is set.
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = CreateTopicRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResponse>)),
        (
            status = 400,
            description = "Invalid topic text",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TEXT_TOO_LONG", "message": "Topic text cannot exceed 200 characters" }
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    let payload = payload.into_inner();

    info!(user_id = %user.user_id, is_public = payload.is_public, "Create topic attempt");

    let command = match CreateTopicCommand::new(user.user_id, payload.text, payload.is_public) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(user_id = %user.user_id, error = %err, "Create topic rejected");
            return map_command_error(err);
        }
    };

    match data.topic.create.execute(command).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, user_id = %user.user_id, "Topic created");
            ApiResponse::created(TopicResponse::from(topic))
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> HttpResponse {
    match err {
        CreateTopicCommandError::EmptyText => {
            ApiResponse::bad_request("EMPTY_TEXT", &err.to_string())
        }
        CreateTopicCommandError::TextTooLong => {
            ApiResponse::bad_request("TEXT_TOO_LONG", &err.to_string())
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::RepositoryError(e) => {
            error!(error = %e, "Failed to create topic");
            ApiResponse::internal_error()
        }
    }
}
