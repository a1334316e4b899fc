use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::shared::api::ApiResponse;

/// Represents an authenticated user (verified or not)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub is_verified: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest, token: &str) -> Result<AuthenticatedUser, ActixError> {
    let provider = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider is not registered as app data");
            create_api_error(ApiResponse::internal_error())
        })?;

    let claims = provider.verify_token(token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        is_verified: claims.is_verified,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        ready(authenticate(req, &token))
    }
}

/// Represents a verified authenticated user. Owner routes require this.
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub user_id: Uuid,
}

impl VerifiedUser {
    pub fn owner(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

impl FromRequest for VerifiedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth_user_future = AuthenticatedUser::from_request(req, payload);

        match auth_user_future.into_inner() {
            Ok(auth_user) => {
                if !auth_user.is_verified {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "EMAIL_NOT_VERIFIED",
                        "Email verification required",
                    ))));
                }

                ready(Ok(VerifiedUser {
                    user_id: auth_user.user_id,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

/// Optional identity. No Authorization header means an anonymous caller;
/// a header that is present but invalid is still rejected.
#[derive(Debug, Clone, Default)]
pub struct MaybeUser {
    pub user_id: Option<Uuid>,
}

impl MaybeUser {
    pub fn owner(&self) -> Option<UserId> {
        self.user_id.map(UserId::from)
    }
}

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if req.headers().get("Authorization").is_none() {
            return ready(Ok(MaybeUser::default()));
        }

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        ready(authenticate(req, &token).map(|user| MaybeUser {
            user_id: Some(user.user_id),
        }))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
