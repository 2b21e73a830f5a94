use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserInputError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Letters, digits and @/./+/-/_ only, at most 150 characters
    #[schema(example = "ana_learns")]
    pub username: String,

    /// Password (8 to 128 characters, not entirely numeric)
    #[schema(example = "correct horse battery")]
    pub password1: String,

    /// Must repeat `password1`
    #[schema(example = "correct horse battery")]
    pub password2: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// Created user details
    user: RegisteredUser,

    /// Access token for the new session
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    /// Refresh token for the new session
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "ana_learns")]
    username: String,
}

fn map_input_error(err: CreateUserInputError, req: &CreateUserRequest) -> HttpResponse {
    warn!(username = %req.username, error = %err, "Invalid registration input");

    match err {
        CreateUserInputError::InvalidUsername => {
            ApiResponse::bad_request("INVALID_USERNAME", &err.to_string())
        }
        CreateUserInputError::PasswordMismatch => {
            ApiResponse::bad_request("PASSWORD_MISMATCH", &err.to_string())
        }
    }
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    match &err {
        CreateUserError::InvalidPassword(reason) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_PASSWORD", &reason.to_string())
        }

        CreateUserError::UsernameAlreadyExists => {
            warn!(username = %req.username, "User already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }

        CreateUserError::HashingFailed(_) | CreateUserError::RepositoryError(_) => {
            error!(
                username = %req.username,
                error = %err,
                "Unhandled user creation error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates the account and logs the new user in: the response carries a
/// fresh access/refresh token pair.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User created and logged in",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "ana_learns"
                    },
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid username" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_USERNAME",
                        "message": "Username may contain only letters, digits and @/./+/-/_ (max 150 characters)"
                    }
                }))),
                ("Password mismatch" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "PASSWORD_MISMATCH",
                        "message": "The two password fields didn't match"
                    }
                }))),
                ("Invalid password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_PASSWORD",
                        "message": "Password must contain at least 8 characters"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Username already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "User already exists"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    let input = match CreateUserInput::new(
        req.username.clone(),
        req.password1.clone(),
        req.password2.clone(),
    ) {
        Ok(input) => input,
        Err(e) => return map_input_error(e, &req),
    };

    match data.register_user_orchestrator.register_user(input).await {
        Ok(user) => {
            info!(
                user_id = %user.user_id,
                username = %user.username,
                "User registered"
            );

            ApiResponse::created(RegisterUserResponse {
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    username: user.username,
                },
                access_token: user.access_token,
                refresh_token: user.refresh_token,
            })
        }

        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &req),

        Err(e @ UserRegistrationError::TokenGenerationFailed(_)) => {
            error!(username = %req.username, error = %e, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}
