use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{Column, Entity};
use crate::modules::portfolio::application::ports::outgoing::{SlugGenerator, SlugGeneratorError};
use crate::modules::portfolio::domain::slug::{base_slug, slug_candidate};
use crate::shared::db_error::is_connection_error;

pub const DEFAULT_SLUG_ATTEMPTS: u32 = 50;

/// Probes `portfolios.slug` for `<title>-<owner8>`, then `-2`, `-3`, ...
/// The unique index still decides at insert time; callers retry on conflict.
#[derive(Clone)]
pub struct SlugGeneratorPostgres {
    db: Arc<DatabaseConnection>,
    max_attempts: u32,
}

impl SlugGeneratorPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            max_attempts: DEFAULT_SLUG_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    async fn is_taken(&self, slug: &str) -> Result<bool, SlugGeneratorError> {
        let count = Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Slug))).eq(slug))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}

#[async_trait]
impl SlugGenerator for SlugGeneratorPostgres {
    async fn generate(&self, title: &str, owner: UserId) -> Result<String, SlugGeneratorError> {
        let owner_uuid: Uuid = owner.into();
        let base = base_slug(title, owner_uuid);

        for attempt in 1..=self.max_attempts {
            let candidate = slug_candidate(&base, attempt);
            if !self.is_taken(&candidate).await? {
                return Ok(candidate);
            }
            debug!("Slug '{}' taken, trying next", candidate);
        }

        Err(SlugGeneratorError::Exhausted(base))
    }
}

fn map_db_err(e: DbErr) -> SlugGeneratorError {
    if is_connection_error(&e) {
        SlugGeneratorError::ServiceUnavailable(e.to_string())
    } else {
        SlugGeneratorError::DatabaseError(e.to_string())
    }
}
