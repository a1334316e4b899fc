use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::PortfolioView;

#[derive(Debug, Clone)]
pub enum GetSinglePortfolioError {
    NotFound,
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for GetSinglePortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetSinglePortfolioError::NotFound => write!(f, "portfolio not found"),
            GetSinglePortfolioError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            GetSinglePortfolioError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetSinglePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioView, GetSinglePortfolioError>;
}
