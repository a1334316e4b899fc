use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, PatchField, PatchPortfolioData, PortfolioRecord, PortfolioRepository,
    PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::PortfolioStatus;
use crate::shared::db_error::is_connection_error;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn create_portfolio(
        &self,
        data: CreatePortfolioData,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError> {
        let owner_uuid: Uuid = data.owner.into();
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner_uuid),
            template_id: Set(data.template_id),
            title: Set(data.title.trim().to_string()),
            slug: Set(data.slug.trim().to_lowercase()),
            profile_data: Set(to_json(&data.profile)?),
            design_settings: Set(to_json(&data.design)?),
            status: Set(PortfolioStatus::Draft.as_str().to_string()),
            published_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        model_to_record(result)
    }

    async fn patch_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        match data.template_id {
            PatchField::Unset => {}
            PatchField::Null => model.template_id = Set(None),
            PatchField::Value(id) => model.template_id = Set(Some(id)),
        }

        if let PatchField::Value(profile) = data.profile {
            model.profile_data = Set(to_json(&profile)?);
        }

        if let PatchField::Value(design) = data.design {
            model.design_settings = Set(to_json(&design)?);
        }

        let has_changes = model.title.is_set()
            || model.template_id.is_set()
            || model.profile_data.is_set()
            || model.design_settings.is_set();

        if !has_changes {
            let result = Entity::find_by_id(portfolio_id)
                .filter(Column::UserId.eq(owner_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(PortfolioRepositoryError::NotFound)?;

            return model_to_record(result);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(portfolio_id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(PortfolioRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn publish_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let model = ActiveModel {
            status: Set(PortfolioStatus::Published.as_str().to_string()),
            published_at: Set(Some(Utc::now().fixed_offset())),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(portfolio_id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(PortfolioRepositoryError::NotFound)?;

        model_to_record(result)
    }

    async fn delete_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(portfolio_id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_record(model: portfolios::Model) -> Result<PortfolioRecord, PortfolioRepositoryError> {
    model
        .to_record()
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, PortfolioRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| PortfolioRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> PortfolioRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        PortfolioRepositoryError::SlugAlreadyExists
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
    if is_connection_error(&e) {
        PortfolioRepositoryError::ServiceUnavailable(e.to_string())
    } else {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
