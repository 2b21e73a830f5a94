use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use super::topic_dto::TopicDetailResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::MaybeUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicError,
    AppState,
};

/// Get a topic with its entries
///
/// Entries are listed newest first. A private topic that belongs to someone
/// else is reported exactly like a missing one.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Topic and entries", body = inline(SuccessResponse<TopicDetailResponse>)),
        (status = 401, description = "Authorization header present but invalid", body = ErrorResponse),
        (
            status = 404,
            description = "Topic does not exist or is not visible",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TOPIC_NOT_FOUND", "message": "Topic not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics/{topic_id}")]
pub async fn get_topic_handler(
    viewer: MaybeUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_single.execute(viewer.user_id(), topic_id).await {
        Ok(detail) => ApiResponse::success(TopicDetailResponse::from(detail)),
        Err(err) => map_get_topic_error(topic_id, err),
    }
}

fn map_get_topic_error(topic_id: Uuid, err: GetTopicError) -> HttpResponse {
    match err {
        GetTopicError::NotFound => {
            warn!(%topic_id, "Topic not found or not visible");
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        GetTopicError::QueryFailed(e) => {
            error!(%topic_id, error = %e, "Failed to fetch topic");
            ApiResponse::internal_error()
        }
    }
}
