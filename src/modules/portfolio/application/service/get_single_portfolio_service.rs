use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetSinglePortfolioError, GetSinglePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioView,
};

pub struct GetSinglePortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetSinglePortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSinglePortfolioUseCase for GetSinglePortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioView, GetSinglePortfolioError> {
        self.query
            .get_by_id(owner, portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::NotFound => GetSinglePortfolioError::NotFound,
                PortfolioQueryError::ServiceUnavailable(msg) => {
                    GetSinglePortfolioError::ServiceUnavailable(msg)
                }
                PortfolioQueryError::DatabaseError(msg) => {
                    GetSinglePortfolioError::RepositoryError(msg)
                }
                PortfolioQueryError::SerializationError(msg) => {
                    GetSinglePortfolioError::RepositoryError(msg)
                }
            })
    }
}
