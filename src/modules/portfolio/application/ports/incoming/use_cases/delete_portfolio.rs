use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub enum DeletePortfolioError {
    NotFound,
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for DeletePortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletePortfolioError::NotFound => write!(f, "portfolio not found"),
            DeletePortfolioError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            DeletePortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait DeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, owner: UserId, portfolio_id: Uuid) -> Result<(), DeletePortfolioError>;
}
