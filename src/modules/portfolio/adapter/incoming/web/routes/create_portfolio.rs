use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioCommand, CreatePortfolioError,
};
use crate::modules::portfolio::domain::Document;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Both fields optional: an empty body creates a blank portfolio
/// with the default title.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePortfolioRequest {
    pub title: String,
    pub document: Document,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolios")]
pub async fn create_portfolio_handler(
    user: VerifiedUser,
    req: web::Json<CreatePortfolioRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = CreatePortfolioCommand {
        owner: user.owner(),
        title: req.title,
        document: req.document,
    };

    match data.portfolio.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreatePortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable creating portfolio: {}", msg);
            ApiResponse::service_unavailable()
        }

        Err(CreatePortfolioError::RepositoryError(msg)) => {
            error!("Repository error creating portfolio: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
