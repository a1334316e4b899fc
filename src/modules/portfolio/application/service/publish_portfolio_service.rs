use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    PublishPortfolioError, PublishPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioRecord, PortfolioRepository,
    PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::validate_for_publish;

/// Publishes what is stored, not what a client thinks is stored: the
/// document is reloaded and validated before the status flips.
pub struct PublishPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> PublishPortfolioService<Q, R>
where
    Q: PortfolioQuery,
    R: PortfolioRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> PublishPortfolioUseCase for PublishPortfolioService<Q, R>
where
    Q: PortfolioQuery + Send + Sync,
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioRecord, PublishPortfolioError> {
        let view = self
            .query
            .get_by_id(owner, portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::NotFound => PublishPortfolioError::NotFound,
                PortfolioQueryError::ServiceUnavailable(msg) => {
                    PublishPortfolioError::ServiceUnavailable(msg)
                }
                PortfolioQueryError::DatabaseError(msg) => {
                    PublishPortfolioError::RepositoryError(msg)
                }
                PortfolioQueryError::SerializationError(msg) => {
                    PublishPortfolioError::RepositoryError(msg)
                }
            })?;

        let validation = validate_for_publish(&view.document);
        if !validation.valid {
            warn!(
                portfolio_id = %portfolio_id,
                fields = ?validation.field_errors.keys().collect::<Vec<_>>(),
                "Publish rejected, portfolio incomplete"
            );
            return Err(PublishPortfolioError::Validation(validation));
        }

        let record = self
            .repository
            .publish_portfolio(owner, portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => PublishPortfolioError::NotFound,
                PortfolioRepositoryError::ServiceUnavailable(msg) => {
                    PublishPortfolioError::ServiceUnavailable(msg)
                }
                PortfolioRepositoryError::DatabaseError(msg) => {
                    PublishPortfolioError::RepositoryError(msg)
                }
                PortfolioRepositoryError::SerializationError(msg) => {
                    PublishPortfolioError::RepositoryError(msg)
                }
                // Defensive: should never happen
                PortfolioRepositoryError::SlugAlreadyExists => {
                    PublishPortfolioError::RepositoryError(
                        "unexpected slug conflict on publish".to_string(),
                    )
                }
            })?;

        info!(portfolio_id = %portfolio_id, slug = %record.slug, "Portfolio published");
        Ok(record)
    }
}
