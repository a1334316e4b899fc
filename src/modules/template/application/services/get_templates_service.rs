use async_trait::async_trait;

use crate::template::application::{
    ports::incoming::use_cases::{GetTemplatesError, GetTemplatesUseCase},
    ports::outgoing::{TemplateListFilter, TemplateQuery, TemplateQueryError, TemplateView},
};

/// Category value the catalog UI sends for "no category filter".
const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone)]
pub struct GetTemplatesService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTemplatesService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn normalize(filter: TemplateListFilter) -> TemplateListFilter {
    let non_blank = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    TemplateListFilter {
        category: non_blank(filter.category)
            .map(|c| c.to_lowercase())
            .filter(|c| c != ALL_CATEGORIES),
        premium: filter.premium,
        search: non_blank(filter.search),
    }
}

#[async_trait]
impl<Q> GetTemplatesUseCase for GetTemplatesService<Q>
where
    Q: TemplateQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: TemplateListFilter,
    ) -> Result<Vec<TemplateView>, GetTemplatesError> {
        self.query
            .list(normalize(filter))
            .await
            .map_err(|e| match e {
                TemplateQueryError::ServiceUnavailable(msg) => {
                    GetTemplatesError::ServiceUnavailable(msg)
                }
                other => GetTemplatesError::QueryFailed(other.to_string()),
            })
    }
}
