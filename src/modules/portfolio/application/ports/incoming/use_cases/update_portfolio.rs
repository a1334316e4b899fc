use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::{
    PatchPortfolioData, PortfolioRecord,
};

#[derive(Debug, Clone)]
pub enum UpdatePortfolioError {
    NotFound,
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for UpdatePortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdatePortfolioError::NotFound => write!(f, "portfolio not found"),
            UpdatePortfolioError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            UpdatePortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait UpdatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioRecord, UpdatePortfolioError>;
}
