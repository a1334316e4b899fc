use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::portfolio::domain::TemplateRef;

/// One row of the template catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

impl TemplateView {
    /// The reference a document stores when this template is picked.
    pub fn to_template_ref(&self) -> TemplateRef {
        TemplateRef::from_catalog(self.id, &self.name, &self.description)
    }
}

/// All filters are optional and combine with AND.
/// `search` matches name or description, case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateListFilter {
    pub category: Option<String>,
    pub premium: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TemplateQueryError {
    #[error("Template not found")]
    NotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TemplateQuery: Send + Sync {
    /// Newest first.
    async fn list(&self, filter: TemplateListFilter) -> Result<Vec<TemplateView>, TemplateQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<TemplateView, TemplateQueryError>;
}
