use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfoliosError, GetPortfoliosUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioView,
};

pub struct GetPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPortfoliosService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfoliosUseCase for GetPortfoliosService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<PortfolioView>, GetPortfoliosError> {
        self.query
            .list_for_owner(owner)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::ServiceUnavailable(msg) => {
                    GetPortfoliosError::ServiceUnavailable(msg)
                }
                PortfolioQueryError::DatabaseError(msg) => GetPortfoliosError::RepositoryError(msg),
                PortfolioQueryError::SerializationError(msg) => {
                    GetPortfoliosError::RepositoryError(msg)
                }
                // Defensive: listing never reports a missing row
                PortfolioQueryError::NotFound => GetPortfoliosError::RepositoryError(
                    "unexpected not found while listing portfolios".to_string(),
                ),
            })
    }
}
