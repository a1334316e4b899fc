use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetSinglePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolios/{id}")]
pub async fn get_single_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data
        .portfolio
        .get_single
        .execute(user.owner(), portfolio_id)
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(GetSinglePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetSinglePortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable loading portfolio {}: {}", portfolio_id, msg);
            ApiResponse::service_unavailable()
        }

        Err(GetSinglePortfolioError::RepositoryError(msg)) => {
            error!("Failed to load portfolio {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}
