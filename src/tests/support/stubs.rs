use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::{UserProfileQuery, UserProfileQueryError};
use crate::template::application::ports::incoming::use_cases::{
    GetTemplateError, GetTemplateUseCase, GetTemplatesError, GetTemplatesUseCase,
};
use crate::template::application::ports::outgoing::{TemplateListFilter, TemplateView};

/* --------------------------------------------------
 * User profiles
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubUserProfileQuery {
    result: Result<Option<UserProfile>, UserProfileQueryError>,
}

impl StubUserProfileQuery {
    pub fn named(owner: UserId, full_name: &str) -> Self {
        let now = Utc::now();
        Self {
            result: Ok(Some(UserProfile {
                id: owner,
                email: "owner@example.com".to_string(),
                full_name: full_name.to_string(),
                avatar_url: None,
                created_at: now,
                updated_at: now,
            })),
        }
    }

    /// Signed-in user without a profile row.
    pub fn empty() -> Self {
        Self { result: Ok(None) }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(UserProfileQueryError::ServiceUnavailable(
                "connection refused".to_string(),
            )),
        }
    }
}

#[async_trait]
impl UserProfileQuery for StubUserProfileQuery {
    async fn find_by_id(
        &self,
        _user_id: UserId,
    ) -> Result<Option<UserProfile>, UserProfileQueryError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Templates
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetTemplatesUseCase {
    result: Result<Vec<TemplateView>, GetTemplatesError>,
}

impl StubGetTemplatesUseCase {
    pub fn success(data: Vec<TemplateView>) -> Self {
        Self { result: Ok(data) }
    }
}

#[async_trait]
impl GetTemplatesUseCase for StubGetTemplatesUseCase {
    async fn execute(
        &self,
        _filter: TemplateListFilter,
    ) -> Result<Vec<TemplateView>, GetTemplatesError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubGetTemplateUseCase;

#[async_trait]
impl GetTemplateUseCase for StubGetTemplateUseCase {
    async fn execute(&self, _id: Uuid) -> Result<TemplateView, GetTemplateError> {
        Err(GetTemplateError::NotFound)
    }
}
