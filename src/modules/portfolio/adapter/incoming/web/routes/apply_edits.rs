use std::sync::Arc;

use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::auth::application::ports::outgoing::FixedSession;
use crate::modules::portfolio::application::session::{
    BuilderSession, SaveOutcomeKind, SessionError,
};
use crate::modules::portfolio::domain::{decode_action, Document, EditAction};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Actions are applied in order, then the result is saved once.
#[derive(Debug, Deserialize)]
pub struct ApplyEditsRequest {
    #[serde(default)]
    pub actions: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct ApplyEditsResponse {
    pub document: Document,
    pub outcome: SaveOutcomeKind,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolios/{id}/edits")]
pub async fn apply_edits_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: web::Json<ApplyEditsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    let mut actions: Vec<EditAction> = Vec::new();
    for (index, raw) in req.into_inner().actions.into_iter().enumerate() {
        match decode_action(raw) {
            Ok(EditAction::Unknown) => debug!("Skipping unknown action at index {}", index),
            Ok(action) => actions.push(action),
            Err(e) => {
                warn!("Malformed action at index {}: {}", index, e);
                return ApiResponse::bad_request(
                    "INVALID_ACTION",
                    &format!("Action {} is malformed: {}", index, e),
                );
            }
        }
    }

    let mut session = BuilderSession::new(
        data.portfolio.clone(),
        data.save_coordinator.clone(),
        Arc::new(FixedSession::signed_in(user.owner())),
        data.user_profile_query.clone(),
    );

    if let Err(e) = session.open(portfolio_id).await {
        return session_error_response(portfolio_id, e);
    }

    session.dispatch_all(actions);

    match session.save().await {
        Ok(outcome) => ApiResponse::success(ApplyEditsResponse {
            document: session.document().clone(),
            outcome: outcome.kind(),
        }),
        Err(e) => session_error_response(portfolio_id, e),
    }
}

fn session_error_response(portfolio_id: Uuid, e: SessionError) -> HttpResponse {
    match e {
        SessionError::NotSignedIn => {
            ApiResponse::unauthorized("UNAUTHORIZED", "Sign in to save your portfolio")
        }
        SessionError::NotFound => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }
        e @ SessionError::InvalidSections(_) => {
            ApiResponse::bad_request("DUPLICATE_SECTION_ID", &e.to_string())
        }
        SessionError::Validation(validation) => {
            ApiResponse::validation_failed("Portfolio is incomplete", validation.field_errors)
        }
        SessionError::ServiceUnavailable(msg) => {
            error!("Database unavailable editing portfolio {}: {}", portfolio_id, msg);
            ApiResponse::service_unavailable()
        }
        SessionError::Repository(msg) => {
            error!("Failed to save edits to portfolio {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}
