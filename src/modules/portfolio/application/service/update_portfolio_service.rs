use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    UpdatePortfolioError, UpdatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PatchField, PatchPortfolioData, PortfolioRecord, PortfolioRepository,
    PortfolioRepositoryError,
};

pub struct UpdatePortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> UpdatePortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Title is not nullable: a null or blank title keeps the stored one.
fn normalize(mut data: PatchPortfolioData) -> PatchPortfolioData {
    data.title = match data.title {
        PatchField::Value(title) if !title.trim().is_empty() => {
            PatchField::Value(title.trim().to_string())
        }
        _ => PatchField::Unset,
    };
    data
}

#[async_trait]
impl<R> UpdatePortfolioUseCase for UpdatePortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioRecord, UpdatePortfolioError> {
        self.repository
            .patch_portfolio(owner, portfolio_id, normalize(data))
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => UpdatePortfolioError::NotFound,
                PortfolioRepositoryError::ServiceUnavailable(msg) => {
                    UpdatePortfolioError::ServiceUnavailable(msg)
                }
                PortfolioRepositoryError::DatabaseError(msg) => {
                    UpdatePortfolioError::RepositoryError(msg)
                }
                PortfolioRepositoryError::SerializationError(msg) => {
                    UpdatePortfolioError::RepositoryError(msg)
                }
                // Defensive: should never happen, slugs are not patchable
                PortfolioRepositoryError::SlugAlreadyExists => {
                    UpdatePortfolioError::RepositoryError(
                        "unexpected slug conflict on update".to_string(),
                    )
                }
            })
    }
}
