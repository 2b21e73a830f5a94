// src/shared/api/path_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::PathConfig;

/// A path segment that does not parse (e.g. a malformed UUID) cannot name
/// an existing resource, so it is answered like any other missing one.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::not_found("NOT_FOUND", "Resource not found"),
        )
        .into()
    })
}
