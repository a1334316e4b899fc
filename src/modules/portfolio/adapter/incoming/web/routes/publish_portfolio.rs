use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::ports::incoming::use_cases::PublishPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/portfolios/{id}/publish")]
pub async fn publish_portfolio_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_id = path.into_inner();

    match data.portfolio.publish.execute(user.owner(), portfolio_id).await {
        Ok(record) => {
            info!("Portfolio {} published as '{}'", record.id, record.slug);
            ApiResponse::success(record)
        }

        Err(PublishPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(PublishPortfolioError::Validation(validation)) => {
            ApiResponse::validation_failed("Portfolio is incomplete", validation.field_errors)
        }

        Err(PublishPortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable publishing {}: {}", portfolio_id, msg);
            ApiResponse::service_unavailable()
        }

        Err(PublishPortfolioError::RepositoryError(msg)) => {
            error!("Failed to publish {}: {}", portfolio_id, msg);
            ApiResponse::internal_error()
        }
    }
}
