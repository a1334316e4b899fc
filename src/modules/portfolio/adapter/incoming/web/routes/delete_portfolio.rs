use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolios/{id}")]
pub async fn delete_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.delete.execute(user.owner(), portfolio_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeletePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(DeletePortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable deleting portfolio {}: {}", portfolio_id, msg);
            ApiResponse::service_unavailable()
        }

        Err(DeletePortfolioError::RepositoryError(msg)) => {
            error!("Failed to delete portfolio {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}
