use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::PortfolioView;

#[derive(Debug, Clone)]
pub enum GetPortfoliosError {
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for GetPortfoliosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetPortfoliosError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            GetPortfoliosError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[async_trait]
pub trait GetPortfoliosUseCase: Send + Sync {
    /// Most recently updated first.
    async fn execute(&self, owner: UserId) -> Result<Vec<PortfolioView>, GetPortfoliosError>;
}
