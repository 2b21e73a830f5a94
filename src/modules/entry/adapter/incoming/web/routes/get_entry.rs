use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use super::entry_dto::EntryResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::MaybeUser,
    entry::application::ports::incoming::use_cases::GetEntryError,
    shared::api::ApiResponse,
    AppState,
};

/// Get a single entry
///
/// Visible when its topic is public or owned by the caller.
#[utoipa::path(
    get,
    path = "/api/entries/{entry_id}",
    tag = "entries",
    params(("entry_id" = Uuid, Path, description = "Entry ID")),
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Entry", body = inline(SuccessResponse<EntryResponse>)),
        (status = 401, description = "Authorization header present but invalid", body = ErrorResponse),
        (status = 404, description = "Entry does not exist or is not visible", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/entries/{entry_id}")]
pub async fn get_entry_handler(
    viewer: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.entry.get_single.execute(viewer.user_id(), entry_id).await {
        Ok(entry) => ApiResponse::success(EntryResponse::from(entry)),
        Err(err) => map_get_entry_error(entry_id, err),
    }
}

fn map_get_entry_error(entry_id: Uuid, err: GetEntryError) -> HttpResponse {
    match err {
        GetEntryError::NotFound => {
            warn!(%entry_id, "Entry not found or not visible");
            ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
        }
        GetEntryError::QueryFailed(e) => {
            error!(%entry_id, error = %e, "Failed to fetch entry");
            ApiResponse::internal_error()
        }
    }
}
