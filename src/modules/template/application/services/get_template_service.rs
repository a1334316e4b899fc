use async_trait::async_trait;
use uuid::Uuid;

use crate::template::application::{
    ports::incoming::use_cases::{GetTemplateError, GetTemplateUseCase},
    ports::outgoing::{TemplateQuery, TemplateQueryError, TemplateView},
};

#[derive(Debug, Clone)]
pub struct GetTemplateService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTemplateService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTemplateUseCase for GetTemplateService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<TemplateView, GetTemplateError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            TemplateQueryError::NotFound => GetTemplateError::NotFound,
            TemplateQueryError::ServiceUnavailable(msg) => GetTemplateError::ServiceUnavailable(msg),
            TemplateQueryError::DatabaseError(msg) => GetTemplateError::QueryFailed(msg),
        })
    }
}
