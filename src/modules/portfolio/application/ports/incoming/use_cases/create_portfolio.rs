use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::PortfolioView;
use crate::modules::portfolio::domain::Document;

#[derive(Debug, Clone)]
pub struct CreatePortfolioCommand {
    pub owner: UserId,
    pub title: String,

    /// Initial content; its `id`, `slug` and `status` are ignored.
    pub document: Document,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum CreatePortfolioError {
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for CreatePortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatePortfolioError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            CreatePortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreatePortfolioCommand,
    ) -> Result<PortfolioView, CreatePortfolioError>;
}
