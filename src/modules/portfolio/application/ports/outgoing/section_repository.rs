// src/modules/portfolio/application/ports/outgoing/section_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::domain::{Section, SectionId};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOrder {
    pub id: SectionId,
    pub sort_order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SectionRepositoryError {
    #[error("Section not found")]
    NotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// At least one write of a reorder batch failed. Writes that already
    /// succeeded are not rolled back.
    #[error("Reorder failed for {failed} of {total} sections: {reason}")]
    ReorderFailed {
        failed: usize,
        total: usize,
        reason: String,
    },
}

//
// ──────────────────────────────────────────────────────────
// Port (portfolio_sections table; every call is its own write)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn create_section(
        &self,
        portfolio_id: Uuid,
        section: &Section,
        sort_order: i32,
    ) -> Result<(), SectionRepositoryError>;

    /// Overwrites type, title, content and visibility. Sort order is left alone.
    async fn update_section(
        &self,
        portfolio_id: Uuid,
        section: &Section,
    ) -> Result<(), SectionRepositoryError>;

    async fn delete_section(
        &self,
        portfolio_id: Uuid,
        section_id: SectionId,
    ) -> Result<(), SectionRepositoryError>;

    async fn reorder_sections(
        &self,
        portfolio_id: Uuid,
        order: Vec<SectionOrder>,
    ) -> Result<(), SectionRepositoryError>;
}
