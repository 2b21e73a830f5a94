use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::create_entry::{map_text_error, EntryTextRequest};
use super::entry_dto::EntryResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    entry::application::ports::incoming::use_cases::{UpdateEntryCommand, UpdateEntryError},
    shared::api::ApiResponse,
    AppState,
};

/// Edit an entry
///
/// Replaces the entry text. The entry stays under the same topic. Only the
/// topic owner may edit.
#[utoipa::path(
    put,
    path = "/api/entries/{entry_id}",
    tag = "entries",
    params(("entry_id" = Uuid, Path, description = "Entry ID")),
    request_body = EntryTextRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Entry updated", body = inline(SuccessResponse<EntryResponse>)),
        (status = 400, description = "Empty entry text", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Entry does not exist or is not owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/entries/{entry_id}")]
pub async fn update_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<EntryTextRequest>,
) -> impl Responder {
    let entry_id = path.into_inner();

    info!(user_id = %user.user_id, %entry_id, "Update entry attempt");

    let command = match UpdateEntryCommand::new(user.user_id, entry_id, payload.into_inner().text)
    {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(user_id = %user.user_id, error = %err, "Update entry rejected");
            return map_text_error(err);
        }
    };

    match data.entry.update.execute(command).await {
        Ok(entry) => {
            info!(%entry_id, "Entry updated");
            ApiResponse::success(EntryResponse::from(entry))
        }
        Err(err) => map_update_entry_error(entry_id, err),
    }
}

fn map_update_entry_error(entry_id: Uuid, err: UpdateEntryError) -> HttpResponse {
    match err {
        UpdateEntryError::NotFound => {
            warn!(%entry_id, "Entry not found or not owned");
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
        }
        UpdateEntryError::RepositoryError(e) => {
            error!(%entry_id, error = %e, "Failed to update entry");
            ApiResponse::internal_error()
        }
    }
}
