use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::ports::incoming::use_cases::GetPublicPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Published portfolios only; no token needed.
#[get("/api/public/portfolios/{slug}")]
pub async fn get_public_portfolio_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.portfolio.get_public.execute(&slug).await {
        Ok(view) => ApiResponse::success(view.document),

        Err(GetPublicPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetPublicPortfolioError::ServiceUnavailable(msg)) => {
            error!("Database unavailable loading public portfolio '{}': {}", slug, msg);
            ApiResponse::service_unavailable()
        }

        Err(GetPublicPortfolioError::RepositoryError(msg)) => {
            error!("Failed to load public portfolio '{}': {}", slug, msg);
            ApiResponse::internal_error()
        }
    }
}
