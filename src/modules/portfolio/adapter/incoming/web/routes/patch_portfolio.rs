use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::UpdatePortfolioError;
use crate::modules::portfolio::application::ports::outgoing::{PatchField, PatchPortfolioData};
use crate::modules::portfolio::domain::{DesignSettings, Profile};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Omitted fields are left untouched; `template_id: null` clears the template.
#[derive(Debug, Default, Deserialize)]
pub struct PatchPortfolioRequest {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub template_id: PatchField<Uuid>,
    #[serde(default)]
    pub profile: PatchField<Profile>,
    #[serde(default)]
    pub design: PatchField<DesignSettings>,
}

impl From<PatchPortfolioRequest> for PatchPortfolioData {
    fn from(req: PatchPortfolioRequest) -> Self {
        PatchPortfolioData {
            title: req.title,
            template_id: req.template_id,
            profile: req.profile,
            design: req.design,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[patch("/api/portfolios/{id}")]
pub async fn patch_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    req: web::Json<PatchPortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data
        .portfolio
        .update
        .execute(user.owner(), portfolio_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdatePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(UpdatePortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable updating portfolio {}: {}", portfolio_id, msg);
            ApiResponse::service_unavailable()
        }

        Err(UpdatePortfolioError::RepositoryError(msg)) => {
            error!("Failed to update portfolio {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}
