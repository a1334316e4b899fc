use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRecord;
use crate::modules::portfolio::domain::PublishValidation;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum PublishPortfolioError {
    NotFound,
    /// The stored document is incomplete; nothing was written.
    Validation(PublishValidation),
    ServiceUnavailable(String),
    RepositoryError(String),
}

impl fmt::Display for PublishPortfolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishPortfolioError::NotFound => write!(f, "portfolio not found"),
            PublishPortfolioError::Validation(v) => {
                write!(f, "portfolio is incomplete ({} field errors)", v.field_errors.len())
            }
            PublishPortfolioError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            PublishPortfolioError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PublishPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioRecord, PublishPortfolioError>;
}
