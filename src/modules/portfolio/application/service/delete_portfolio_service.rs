use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    DeletePortfolioError, DeletePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

pub struct DeletePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> DeletePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePortfolioUseCase for DeletePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId, portfolio_id: Uuid) -> Result<(), DeletePortfolioError> {
        self.repository
            .delete_portfolio(owner, portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => DeletePortfolioError::NotFound,
                PortfolioRepositoryError::ServiceUnavailable(msg) => {
                    DeletePortfolioError::ServiceUnavailable(msg)
                }
                PortfolioRepositoryError::DatabaseError(msg) => {
                    DeletePortfolioError::RepositoryError(msg)
                }
                PortfolioRepositoryError::SerializationError(msg) => {
                    DeletePortfolioError::RepositoryError(msg)
                }
                // Defensive: should never happen
                PortfolioRepositoryError::SlugAlreadyExists => {
                    DeletePortfolioError::RepositoryError(
                        "unexpected slug conflict on delete".to_string(),
                    )
                }
            })?;

        info!(portfolio_id = %portfolio_id, owner = %owner, "Portfolio deleted");
        Ok(())
    }
}
