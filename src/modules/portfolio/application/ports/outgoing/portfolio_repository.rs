// src/modules/portfolio/application/ports/outgoing/portfolio_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::domain::{DesignSettings, PortfolioStatus, Profile};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// omitted field => Unset (via #[serde(default)]), null => Null, value => Value
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePortfolioData {
    pub owner: UserId,
    pub title: String,

    /// Assigned once at creation, never patched
    pub slug: String,

    pub template_id: Option<Uuid>,
    pub profile: Profile,
    pub design: DesignSettings,
}

/// Patch semantics:
/// - title/profile/design: Unset => keep, Value => replace whole value
/// - template_id: Unset => keep, Null => clear, Value => set
///
/// Status is not patchable; publishing goes through `publish_portfolio`.
#[derive(Debug, Clone, Default)]
pub struct PatchPortfolioData {
    pub title: PatchField<String>,
    pub template_id: PatchField<Uuid>,
    pub profile: PatchField<Profile>,
    pub design: PatchField<DesignSettings>,
}

impl PatchPortfolioData {
    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.template_id.is_unset()
            && self.profile.is_unset()
            && self.design.is_unset()
    }
}

/// The `portfolios` row alone, without template or sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRecord {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub slug: String,
    pub template_id: Option<Uuid>,
    pub profile: Profile,
    pub design: DesignSettings,
    pub status: PortfolioStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    /// Portfolio doesn't exist OR doesn't belong to owner.
    #[error("Portfolio not found")]
    NotFound,

    /// Unique slug index violated at INSERT time.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, portfolios table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn create_portfolio(
        &self,
        data: CreatePortfolioData,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError>;

    async fn patch_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError>;

    /// Sets status = published and published_at = now. There is no unpublish.
    async fn publish_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError>;

    /// Sections go with it (ON DELETE CASCADE).
    async fn delete_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError>;
}
