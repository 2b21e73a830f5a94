use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, TokenType};
use crate::shared::api::ApiResponse;

/// A request carrying a valid access token. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// The viewer of a read-only endpoint: `None` when no `Authorization`
/// header was sent. A header with a bad token is still rejected with 401.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<UserId>);

impl MaybeUser {
    pub fn user_id(&self) -> Option<UserId> {
        self.0
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest, token: &str) -> Result<UserId, ActixError> {
    let token_provider =
        match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(provider) => provider,
            None => {
                tracing::error!("TokenProvider is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            }
        };

    match token_provider.verify_token(token) {
        Ok(claims) if claims.token_type == TokenType::Access => Ok(UserId::from(claims.sub)),
        Ok(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        ))),
        Err(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        ready(authenticate(req, &token).map(|user_id| AuthenticatedUser { user_id }))
    }
}

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if req.headers().get("Authorization").is_none() {
            return ready(Ok(MaybeUser(None)));
        }

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        ready(authenticate(req, &token).map(|user_id| MaybeUser(Some(user_id))))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
