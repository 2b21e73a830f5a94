use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::{RefreshTokenError, RefreshTokenRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

// ────────────────────────────────────────────────────────────
// Request / Response DTOs
// ────────────────────────────────────────────────────────────

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// Refresh token obtained from login, registration or a previous refresh
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Replacement refresh token; the one sent in the request is now revoked
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,
}

// ────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────

/// Refresh tokens
///
/// Exchanges a refresh token for a new access/refresh pair.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "Tokens refreshed",
            body = inline(SuccessResponse<RefreshTokenResponseDto>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
                }
            })
        ),
        (
            status = 400,
            description = "Empty token",
            body = ErrorResponse
        ),
        (
            status = 401,
            description = "Token rejected",
            body = ErrorResponse,
            examples(
                ("Access token supplied" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_TOKEN_TYPE",
                        "message": "Invalid token type. Please use a refresh token."
                    }
                }))),
                ("Expired or malformed" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_TOKEN",
                        "message": "Invalid or expired refresh token"
                    }
                }))),
                ("Already used" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "TOKEN_REVOKED",
                        "message": "Refresh token has been revoked"
                    }
                })))
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Token refresh attempt");

    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Token refresh rejected: empty token");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => {
            info!("Token refreshed successfully");

            ApiResponse::success(RefreshTokenResponseDto {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            })
        }
        Err(e) => map_refresh_error(e),
    }
}

// ────────────────────────────────────────────────────────────
// Error Mapping
// ────────────────────────────────────────────────────────────

fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match err {
        RefreshTokenError::InvalidTokenType => {
            warn!("Token refresh failed: Wrong token type");
            ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type. Please use a refresh token.",
            )
        }

        RefreshTokenError::TokenRevoked => {
            warn!("Token refresh failed: Token revoked");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        RefreshTokenError::TokenExpired
        | RefreshTokenError::TokenInvalid
        | RefreshTokenError::TokenNotYetValid
        | RefreshTokenError::InvalidSignature => {
            warn!(reason = %err, "Token refresh failed");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired refresh token")
        }

        RefreshTokenError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }

        RefreshTokenError::RepositoryError(ref e) => {
            error!(error = %e, "Token store unavailable during refresh");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::refresh_token::{
        IRefreshTokenUseCase, RefreshTokenResponse,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Clone)]
    struct MockRefreshToken {
        result: Result<RefreshTokenResponse, RefreshTokenError>,
    }

    impl MockRefreshToken {
        fn success() -> Self {
            Self {
                result: Ok(RefreshTokenResponse {
                    access_token: "new_access_token".to_string(),
                    refresh_token: "new_refresh_token".to_string(),
                }),
            }
        }

        fn error(err: RefreshTokenError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl IRefreshTokenUseCase for MockRefreshToken {
        async fn execute(
            &self,
            _request: RefreshTokenRequest,
        ) -> Result<RefreshTokenResponse, RefreshTokenError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockRefreshToken, token: &str) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_refresh_token(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(refresh_token_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/refresh")
            .set_json(&json!({ "refresh_token": token }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_refresh_token_success() {
        let (status, body) = call(MockRefreshToken::success(), "some.refresh.token").await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["access_token"], "new_access_token");
        assert_eq!(body["data"]["refresh_token"], "new_refresh_token");
    }

    #[actix_web::test]
    async fn test_refresh_with_access_token_is_wrong_type() {
        let (status, body) = call(
            MockRefreshToken::error(RefreshTokenError::InvalidTokenType),
            "some.access.token",
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn test_refresh_with_revoked_token() {
        let (status, body) = call(
            MockRefreshToken::error(RefreshTokenError::TokenRevoked),
            "some.refresh.token",
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn test_refresh_expired_and_malformed_tokens_are_invalid() {
        for err in [
            RefreshTokenError::TokenExpired,
            RefreshTokenError::TokenInvalid,
            RefreshTokenError::TokenNotYetValid,
            RefreshTokenError::InvalidSignature,
        ] {
            let (status, body) = call(MockRefreshToken::error(err), "x.y.z").await;

            assert_eq!(status, 401);
            assert_eq!(body["error"]["code"], "INVALID_TOKEN");
        }
    }

    #[actix_web::test]
    async fn test_refresh_token_generation_failed() {
        let (status, body) = call(
            MockRefreshToken::error(RefreshTokenError::TokenGenerationFailed(
                "encoding".to_string(),
            )),
            "some.refresh.token",
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn test_refresh_repository_error() {
        let (status, _) = call(
            MockRefreshToken::error(RefreshTokenError::RepositoryError("redis down".to_string())),
            "some.refresh.token",
        )
        .await;

        assert_eq!(status, 500);
    }

    #[actix_web::test]
    async fn test_refresh_with_whitespace_only_token() {
        let (status, body) = call(MockRefreshToken::success(), "   ").await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
