// src/modules/portfolio/adapter/outgoing/portfolio_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_sections, portfolios,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, PortfolioView,
};
use crate::modules::portfolio::domain::{
    PortfolioStatus, Section, SectionContent, SectionType, TemplateRef,
};
use crate::modules::template::adapter::outgoing::sea_orm_entity as templates;
use crate::shared::db_error::is_connection_error;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Template rows keyed by id for every referenced template.
    async fn load_templates(
        &self,
        ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, templates::Model>, PortfolioQueryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = templates::Entity::find()
            .filter(templates::Column::Id.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|t| (t.id, t)).collect())
    }

    /// Sections grouped by portfolio, each group in `sort_order`.
    async fn load_sections(
        &self,
        portfolio_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<Section>>, PortfolioQueryError> {
        if portfolio_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = portfolio_sections::Entity::find()
            .filter(portfolio_sections::Column::PortfolioId.is_in(portfolio_ids))
            .order_by_asc(portfolio_sections::Column::PortfolioId)
            .order_by_asc(portfolio_sections::Column::SortOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut grouped: HashMap<Uuid, Vec<Section>> = HashMap::new();
        for row in rows {
            let portfolio_id = row.portfolio_id;
            if let Some(section) = model_to_section(row) {
                grouped.entry(portfolio_id).or_default().push(section);
            }
        }

        Ok(grouped)
    }

    async fn assemble(
        &self,
        models: Vec<portfolios::Model>,
    ) -> Result<Vec<PortfolioView>, PortfolioQueryError> {
        let template_ids: Vec<Uuid> = models.iter().filter_map(|m| m.template_id).collect();
        let portfolio_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let templates = self.load_templates(template_ids).await?;
        let mut sections = self.load_sections(portfolio_ids).await?;

        models
            .into_iter()
            .map(|model| {
                let template = template_ref(model.template_id, &templates);
                let sections = sections.remove(&model.id).unwrap_or_default();
                model_to_view(model, template, sections)
            })
            .collect()
    }

    async fn assemble_one(
        &self,
        model: portfolios::Model,
    ) -> Result<PortfolioView, PortfolioQueryError> {
        self.assemble(vec![model])
            .await?
            .pop()
            .ok_or(PortfolioQueryError::NotFound)
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<PortfolioView>, PortfolioQueryError> {
        let owner_uuid: Uuid = owner.into();

        let models = portfolios::Entity::find()
            .filter(portfolios::Column::UserId.eq(owner_uuid))
            .order_by_desc(portfolios::Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.assemble(models).await
    }

    async fn get_by_id(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioView, PortfolioQueryError> {
        let owner_uuid: Uuid = owner.into();

        let model = portfolios::Entity::find_by_id(portfolio_id)
            .filter(portfolios::Column::UserId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioQueryError::NotFound)?;

        self.assemble_one(model).await
    }

    async fn get_published_by_slug(
        &self,
        slug: &str,
    ) -> Result<PortfolioView, PortfolioQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        let model = portfolios::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(portfolios::Column::Slug))).eq(normalized_slug))
            .filter(portfolios::Column::Status.eq(PortfolioStatus::Published.as_str()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioQueryError::NotFound)?;

        self.assemble_one(model).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn template_ref(
    template_id: Option<Uuid>,
    templates: &HashMap<Uuid, templates::Model>,
) -> TemplateRef {
    template_id
        .and_then(|id| templates.get(&id))
        .map(|t| TemplateRef::from_catalog(t.id, &t.name, &t.description))
        .unwrap_or_default()
}

/// Rows with an unknown type are skipped. Content that does not match
/// its type is replaced by that type's default.
fn model_to_section(model: portfolio_sections::Model) -> Option<Section> {
    let Some(section_type) = SectionType::parse(&model.section_type) else {
        warn!(
            "Skipping section {} of portfolio {}: unknown type '{}'",
            model.id, model.portfolio_id, model.section_type
        );
        return None;
    };

    let content = SectionContent::from_json(section_type, model.content).unwrap_or_else(|e| {
        warn!(
            "Section {} of portfolio {} reset to default content: {}",
            model.id, model.portfolio_id, e
        );
        SectionContent::default_for(section_type)
    });

    Some(Section {
        id: model.id.into(),
        title: model.title,
        content,
        visible: model.is_visible,
    })
}

fn model_to_view(
    model: portfolios::Model,
    template: TemplateRef,
    sections: Vec<Section>,
) -> Result<PortfolioView, PortfolioQueryError> {
    let record = model
        .to_record()
        .map_err(|e| PortfolioQueryError::SerializationError(e.to_string()))?;

    Ok(PortfolioView::from_record(record, template, sections))
}

fn map_db_err(e: DbErr) -> PortfolioQueryError {
    if is_connection_error(&e) {
        PortfolioQueryError::ServiceUnavailable(e.to_string())
    } else {
        PortfolioQueryError::DatabaseError(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
