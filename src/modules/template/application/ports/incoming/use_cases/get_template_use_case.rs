use async_trait::async_trait;
use uuid::Uuid;

use crate::template::application::ports::outgoing::TemplateView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTemplateError {
    #[error("Template not found")]
    NotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Failed to fetch template: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetTemplateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<TemplateView, GetTemplateError>;
}
