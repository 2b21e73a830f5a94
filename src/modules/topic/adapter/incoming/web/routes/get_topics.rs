use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use super::topic_dto::TopicResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::MaybeUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::GetTopicsError,
    AppState,
};

/// List topics
///
/// Anonymous visitors see public topics only. Signed-in users also see their
/// own private topics. Oldest topic first.
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Visible topics", body = inline(SuccessResponse<Vec<TopicResponse>>)),
        (status = 401, description = "Authorization header present but invalid", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(viewer: MaybeUser, data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute(viewer.user_id()).await {
        Ok(topics) => {
            let response = topics
                .into_iter()
                .map(TopicResponse::from)
                .collect::<Vec<_>>();

            ApiResponse::success(response)
        }

        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::QueryFailed(e) => {
            error!(error = %e, "Failed to list topics");
            ApiResponse::internal_error()
        }
    }
}
