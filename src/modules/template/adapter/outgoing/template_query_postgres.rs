use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{Column as TemplateColumn, Entity as TemplateEntity};
use crate::modules::template::application::ports::outgoing::{
    TemplateListFilter, TemplateQuery, TemplateQueryError, TemplateView,
};
use crate::shared::db_error::is_connection_error;

#[derive(Debug, Clone)]
pub struct TemplateQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TemplateQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TemplateQueryError {
    if is_connection_error(&e) {
        TemplateQueryError::ServiceUnavailable(e.to_string())
    } else {
        TemplateQueryError::DatabaseError(e.to_string())
    }
}

/// `%term%` with LIKE wildcards in the term escaped.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl TemplateQuery for TemplateQueryPostgres {
    async fn list(&self, filter: TemplateListFilter) -> Result<Vec<TemplateView>, TemplateQueryError> {
        let mut query = TemplateEntity::find();

        if let Some(category) = filter.category {
            query = query.filter(TemplateColumn::Category.eq(category));
        }

        if let Some(premium) = filter.premium {
            query = query.filter(TemplateColumn::IsPremium.eq(premium));
        }

        if let Some(search) = filter.search {
            let pattern = like_pattern(&search);
            query = query.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(TemplateColumn::Name))).like(pattern.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(TemplateColumn::Description))).like(pattern)),
            );
        }

        let models = query
            .order_by_desc(TemplateColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_view()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<TemplateView, TemplateQueryError> {
        TemplateEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_view())
            .ok_or(TemplateQueryError::NotFound)
    }
}
