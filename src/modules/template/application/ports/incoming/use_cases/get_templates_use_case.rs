use async_trait::async_trait;

use crate::template::application::ports::outgoing::{TemplateListFilter, TemplateView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTemplatesError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Failed to fetch templates: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTemplatesUseCase: Send + Sync {
    async fn execute(&self, filter: TemplateListFilter) -> Result<Vec<TemplateView>, GetTemplatesError>;
}
