use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserProfileQueryError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// `Ok(None)` when the user has no profile row yet.
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserProfile>, UserProfileQueryError>;
}
