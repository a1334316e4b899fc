use async_trait::async_trait;
use chrono::Utc;
use futures::future::join_all;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_sections::{
    ActiveModel, Column, Entity,
};
use crate::modules::portfolio::application::ports::outgoing::{
    SectionOrder, SectionRepository, SectionRepositoryError,
};
use crate::modules::portfolio::domain::{Section, SectionId};
use crate::shared::db_error::is_connection_error;

#[derive(Clone)]
pub struct SectionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SectionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn set_sort_order(
        &self,
        portfolio_id: Uuid,
        entry: SectionOrder,
    ) -> Result<(), SectionRepositoryError> {
        let model = ActiveModel {
            sort_order: Set(entry.sort_order),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(entry.id.value()))
            .filter(Column::PortfolioId.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SectionRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl SectionRepository for SectionRepositoryPostgres {
    async fn create_section(
        &self,
        portfolio_id: Uuid,
        section: &Section,
        sort_order: i32,
    ) -> Result<(), SectionRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(section.id.value()),
            portfolio_id: Set(portfolio_id),
            section_type: Set(section.section_type().as_str().to_string()),
            title: Set(section.title.clone()),
            content: Set(section.content.to_json()),
            is_visible: Set(section.visible),
            sort_order: Set(sort_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Entity::insert(model)
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn update_section(
        &self,
        portfolio_id: Uuid,
        section: &Section,
    ) -> Result<(), SectionRepositoryError> {
        let model = ActiveModel {
            section_type: Set(section.section_type().as_str().to_string()),
            title: Set(section.title.clone()),
            content: Set(section.content.to_json()),
            is_visible: Set(section.visible),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(section.id.value()))
            .filter(Column::PortfolioId.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SectionRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_section(
        &self,
        portfolio_id: Uuid,
        section_id: SectionId,
    ) -> Result<(), SectionRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(section_id.value()))
            .filter(Column::PortfolioId.eq(portfolio_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SectionRepositoryError::NotFound);
        }

        Ok(())
    }

    /// One UPDATE per entry, issued concurrently. No transaction: entries
    /// written before a failure keep their new order.
    async fn reorder_sections(
        &self,
        portfolio_id: Uuid,
        order: Vec<SectionOrder>,
    ) -> Result<(), SectionRepositoryError> {
        let total = order.len();

        let results = join_all(
            order
                .into_iter()
                .map(|entry| self.set_sort_order(portfolio_id, entry)),
        )
        .await;

        let failures: Vec<SectionRepositoryError> =
            results.into_iter().filter_map(Result::err).collect();

        let Some(first) = failures.first() else {
            return Ok(());
        };

        warn!(
            "Reorder of portfolio {} failed for {} of {} sections",
            portfolio_id,
            failures.len(),
            total
        );

        // A dead connection is reported as such rather than as a partial reorder
        if let SectionRepositoryError::ServiceUnavailable(msg) = first {
            if failures.len() == total {
                return Err(SectionRepositoryError::ServiceUnavailable(msg.clone()));
            }
        }

        Err(SectionRepositoryError::ReorderFailed {
            failed: failures.len(),
            total,
            reason: first.to_string(),
        })
    }
}

fn map_db_err(e: DbErr) -> SectionRepositoryError {
    if is_connection_error(&e) {
        SectionRepositoryError::ServiceUnavailable(e.to_string())
    } else {
        SectionRepositoryError::DatabaseError(e.to_string())
    }
}
