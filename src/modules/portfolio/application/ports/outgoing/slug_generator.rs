use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SlugGeneratorError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("No free slug for base '{0}'")]
    Exhausted(String),
}

#[async_trait]
pub trait SlugGenerator: Send + Sync {
    /// A slug no stored portfolio currently holds, derived from `title` and `owner`.
    async fn generate(&self, title: &str, owner: UserId) -> Result<String, SlugGeneratorError>;
}
