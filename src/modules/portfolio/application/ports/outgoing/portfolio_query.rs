// src/modules/portfolio/application/ports/outgoing/portfolio_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::portfolio_repository::PortfolioRecord;
use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::domain::{Document, Section, TemplateRef};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// A stored portfolio with its template and ordered sections joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub slug: String,
    pub document: Document,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioView {
    pub fn from_record(record: PortfolioRecord, template: TemplateRef, sections: Vec<Section>) -> Self {
        let document = Document {
            id: Some(record.id),
            template,
            profile: record.profile,
            sections,
            design: record.design,
            status: record.status,
            slug: Some(record.slug.clone()),
        };

        Self {
            id: record.id,
            owner: record.owner,
            title: record.title,
            slug: record.slug,
            document,
            published_at: record.published_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    /// Portfolio doesn't exist, isn't owned by the caller, or isn't published.
    #[error("Portfolio not found")]
    NotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins portfolio_templates and portfolio_sections)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// Most recently updated first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<PortfolioView>, PortfolioQueryError>;

    /// Owner-scoped read
    async fn get_by_id(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioView, PortfolioQueryError>;

    /// Public read; drafts are reported as `NotFound`.
    async fn get_published_by_slug(&self, slug: &str)
        -> Result<PortfolioView, PortfolioQueryError>;
}
