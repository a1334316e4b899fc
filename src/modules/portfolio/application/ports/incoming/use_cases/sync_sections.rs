use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::domain::Section;

/// What a sync wrote, by kind of write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub unchanged: usize,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub enum SyncSectionsError {
    NotFound,
    /// The same section id appears twice in the request.
    DuplicateSection(String),
    ServiceUnavailable(String),
    /// Some sort_order writes failed; the stored order may be partially updated.
    ReorderFailed(String),
    RepositoryError(String),
}

impl fmt::Display for SyncSectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncSectionsError::NotFound => write!(f, "portfolio not found"),
            SyncSectionsError::DuplicateSection(id) => {
                write!(f, "section {} appears more than once", id)
            }
            SyncSectionsError::ServiceUnavailable(msg) => {
                write!(f, "service unavailable: {}", msg)
            }
            SyncSectionsError::ReorderFailed(msg) => write!(f, "reorder failed: {}", msg),
            SyncSectionsError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SyncSectionsUseCase: Send + Sync {
    /// Makes the stored sections equal to `sections`, in that order.
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        sections: Vec<Section>,
    ) -> Result<SyncSummary, SyncSectionsError>;
}
