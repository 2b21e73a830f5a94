use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, LogoutRequestDto,
    LogoutResponseBody, RefreshTokenRequestDto, RefreshTokenResponseDto, RegisterUserResponse,
    RegisteredUser,
};
// Entries
use crate::entry::adapter::incoming::web::routes::{EntryResponse, EntryTextRequest};
// Topics
use crate::topic::adapter::incoming::web::routes::{
    CreateTopicRequest, TopicDetailResponse, TopicResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Log API",
        version = "1.0.0",
        description = "Keep a log of topics you are learning about and dated entries under each one"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic_handler,

        // Entry endpoints
        crate::entry::adapter::incoming::web::routes::create_entry_handler,
        crate::entry::adapter::incoming::web::routes::get_entry_handler,
        crate::entry::adapter::incoming::web::routes::update_entry_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            LogoutRequestDto,
            LogoutResponseBody,
            RefreshTokenRequestDto,
            RefreshTokenResponseDto,

            // Topic DTOs
            CreateTopicRequest,
            TopicResponse,
            TopicDetailResponse,

            // Entry DTOs
            EntryTextRequest,
            EntryResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "topics", description = "Topic endpoints"),
        (name = "entries", description = "Entry endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from login or register"))
                        .build(),
                ),
            )
        }
    }
}
