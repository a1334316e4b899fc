use async_trait::async_trait;
use std::fmt;

use crate::modules::portfolio::application::ports::outgoing::PortfolioView;

#[derive(Debug, Clone)]
pub enum GetPublicPortfolioError {
    NotFound,
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for GetPublicPortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetPublicPortfolioError::NotFound => write!(f, "portfolio not found"),
            GetPublicPortfolioError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            GetPublicPortfolioError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait GetPublicPortfolioUseCase: Send + Sync {
    /// Only published portfolios are visible here.
    async fn execute(&self, slug: &str) -> Result<PortfolioView, GetPublicPortfolioError>;
}
