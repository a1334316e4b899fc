use async_trait::async_trait;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioError, GetPublicPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioView,
};

pub struct GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicPortfolioUseCase for GetPublicPortfolioService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<PortfolioView, GetPublicPortfolioError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(GetPublicPortfolioError::NotFound);
        }

        self.query
            .get_published_by_slug(slug)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::NotFound => GetPublicPortfolioError::NotFound,
                PortfolioQueryError::ServiceUnavailable(msg) => {
                    GetPublicPortfolioError::ServiceUnavailable(msg)
                }
                PortfolioQueryError::DatabaseError(msg) => {
                    GetPublicPortfolioError::RepositoryError(msg)
                }
                PortfolioQueryError::SerializationError(msg) => {
                    GetPublicPortfolioError::RepositoryError(msg)
                }
            })
    }
}
