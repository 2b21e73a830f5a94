use crate::api::schemas::SuccessResponse;
use crate::modules::auth::application::use_cases::logout_user::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Default)]
pub struct LogoutRequestDto {
    /// Refresh token to revoke. Optional: without it logout only ends the
    /// client-side session.
    #[serde(default)]
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Log out
///
/// Revokes the supplied refresh token. Always reports success.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body(content = LogoutRequestDto, description = "Body may be omitted"),
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<LogoutResponseBody>),
            example = json!({
                "success": true,
                "data": { "message": "Logged out successfully" }
            })
        ),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: Option<web::Json<LogoutRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.logout_user_use_case;
    let dto = req.map(|r| r.into_inner()).unwrap_or_default();

    info!(
        with_refresh_token = dto.refresh_token.is_some(),
        "User logout attempt"
    );

    match use_case.execute(LogoutRequest::new(dto.refresh_token)).await {
        Ok(response) => {
            info!("User logged out successfully");
            ApiResponse::success(LogoutResponseBody {
                message: response.message,
            })
        }

        // The client discards its tokens either way
        Err(LogoutError::TokenRevocationFailed(ref e)) => {
            error!(error = %e, "Token revocation failed during logout");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out successfully".to_string(),
            })
        }

        Err(LogoutError::DatabaseError(ref e)) => {
            error!(error = %e, "Database error during logout");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out successfully".to_string(),
            })
        }
    }
}
