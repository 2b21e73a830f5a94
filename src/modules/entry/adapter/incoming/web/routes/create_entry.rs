use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::entry_dto::EntryResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    entry::application::ports::incoming::use_cases::{
        CreateEntryCommand, CreateEntryError, EntryTextError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct EntryTextRequest {
    #[schema(example = "Learned the Sicilian Defense")]
    pub text: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Add an entry to a topic
///
/// Only the topic owner may add entries, even when the topic is public.
#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/entries",
    tag = "entries",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    request_body = EntryTextRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Entry created", body = inline(SuccessResponse<EntryResponse>)),
        (
            status = 400,
            description = "Empty entry text",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_TEXT", "message": "Entry text cannot be empty" }
            })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Topic does not exist or is not owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/topics/{topic_id}/entries")]
pub async fn create_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<EntryTextRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();

    info!(user_id = %user.user_id, %topic_id, "Create entry attempt");

    let command = match CreateEntryCommand::new(user.user_id, topic_id, payload.into_inner().text)
    {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(user_id = %user.user_id, error = %err, "Create entry rejected");
            return map_text_error(err);
        }
    };

    match data.entry.create.execute(command).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, %topic_id, "Entry created");
            ApiResponse::created(EntryResponse::from(entry))
        }
        Err(err) => map_create_entry_error(topic_id, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

pub(super) fn map_text_error(err: EntryTextError) -> HttpResponse {
    match err {
        EntryTextError::EmptyText => ApiResponse::bad_request("EMPTY_TEXT", &err.to_string()),
    }
}

fn map_create_entry_error(topic_id: Uuid, err: CreateEntryError) -> HttpResponse {
    match err {
        CreateEntryError::TopicNotFound => {
            warn!(%topic_id, "Entry target topic not found or not owned");
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        CreateEntryError::RepositoryError(e) => {
            error!(%topic_id, error = %e, "Failed to create entry");
            ApiResponse::internal_error()
        }
    }
}
