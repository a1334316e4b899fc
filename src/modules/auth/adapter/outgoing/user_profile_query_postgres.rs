use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::user_profiles::{Entity as ProfileEntity, Model as ProfileModel};
use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::user_profile_query::{
    UserProfileQuery, UserProfileQueryError,
};
use crate::shared::db_error::is_connection_error;

#[derive(Clone, Debug)]
pub struct UserProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_profile(model: ProfileModel) -> UserProfile {
        UserProfile {
            id: UserId::from(model.id),
            email: model.email,
            full_name: model.full_name,
            avatar_url: model.avatar_url,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl UserProfileQuery for UserProfileQueryPostgres {
    async fn find_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserProfile>, UserProfileQueryError> {
        let id: Uuid = user_id.into();

        let profile = ProfileEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(profile.map(Self::map_to_profile))
    }
}

fn map_db_err(e: DbErr) -> UserProfileQueryError {
    if is_connection_error(&e) {
        UserProfileQueryError::ServiceUnavailable(e.to_string())
    } else {
        UserProfileQueryError::DatabaseError(e.to_string())
    }
}
