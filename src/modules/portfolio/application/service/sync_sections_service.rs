use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tracing::{debug, error};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    SyncSectionsError, SyncSectionsUseCase, SyncSummary,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioQuery, PortfolioQueryError, SectionOrder, SectionRepository,
    SectionRepositoryError,
};
use crate::modules::portfolio::domain::{section_store, Section, SectionId};

/// Diffs the desired section list against what is stored and issues one
/// write per difference, followed by a single reorder batch.
///
/// Writes are independent; a failure part-way leaves earlier writes in place.
pub struct SyncSectionsService<Q, S>
where
    Q: PortfolioQuery,
    S: SectionRepository,
{
    query: Q,
    sections: S,
}

impl<Q, S> SyncSectionsService<Q, S>
where
    Q: PortfolioQuery,
    S: SectionRepository,
{
    pub fn new(query: Q, sections: S) -> Self {
        Self { query, sections }
    }
}

fn map_section_error(e: SectionRepositoryError) -> SyncSectionsError {
    match e {
        SectionRepositoryError::NotFound => SyncSectionsError::NotFound,
        SectionRepositoryError::ServiceUnavailable(msg) => {
            SyncSectionsError::ServiceUnavailable(msg)
        }
        SectionRepositoryError::DatabaseError(msg) => SyncSectionsError::RepositoryError(msg),
        SectionRepositoryError::SerializationError(msg) => SyncSectionsError::RepositoryError(msg),
        e @ SectionRepositoryError::ReorderFailed { .. } => {
            SyncSectionsError::ReorderFailed(e.to_string())
        }
    }
}

#[async_trait]
impl<Q, S> SyncSectionsUseCase for SyncSectionsService<Q, S>
where
    Q: PortfolioQuery + Send + Sync,
    S: SectionRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        sections: Vec<Section>,
    ) -> Result<SyncSummary, SyncSectionsError> {
        if let Some(id) = section_store::first_duplicate(&sections) {
            debug!(portfolio_id = %portfolio_id, section_id = %id, "Rejecting repeated section id");
            return Err(SyncSectionsError::DuplicateSection(id.to_string()));
        }

        // Ownership check and current state in one read
        let view = self
            .query
            .get_by_id(owner, portfolio_id)
            .await
            .map_err(|e| match e {
                PortfolioQueryError::NotFound => SyncSectionsError::NotFound,
                PortfolioQueryError::ServiceUnavailable(msg) => {
                    SyncSectionsError::ServiceUnavailable(msg)
                }
                PortfolioQueryError::DatabaseError(msg) => SyncSectionsError::RepositoryError(msg),
                PortfolioQueryError::SerializationError(msg) => {
                    SyncSectionsError::RepositoryError(msg)
                }
            })?;

        let stored: HashMap<SectionId, &Section> = view
            .document
            .sections
            .iter()
            .map(|s| (s.id, s))
            .collect();
        let wanted: HashSet<SectionId> = sections.iter().map(|s| s.id).collect();

        let mut summary = SyncSummary::default();

        for section in &view.document.sections {
            if !wanted.contains(&section.id) {
                self.sections
                    .delete_section(portfolio_id, section.id)
                    .await
                    .map_err(map_section_error)?;
                summary.deleted += 1;
            }
        }

        for (index, section) in sections.iter().enumerate() {
            match stored.get(&section.id) {
                None => {
                    self.sections
                        .create_section(portfolio_id, section, index as i32)
                        .await
                        .map_err(map_section_error)?;
                    summary.created += 1;
                }
                Some(existing) if *existing != section => {
                    self.sections
                        .update_section(portfolio_id, section)
                        .await
                        .map_err(map_section_error)?;
                    summary.updated += 1;
                }
                Some(_) => summary.unchanged += 1,
            }
        }

        if !sections.is_empty() {
            let order = sections
                .iter()
                .enumerate()
                .map(|(index, s)| SectionOrder {
                    id: s.id,
                    sort_order: index as i32,
                })
                .collect();

            self.sections
                .reorder_sections(portfolio_id, order)
                .await
                .map_err(|e| {
                    error!(portfolio_id = %portfolio_id, error = %e, "Section reorder failed");
                    map_section_error(e)
                })?;
        }

        debug!(portfolio_id = %portfolio_id, ?summary, "Sections synced");
        Ok(summary)
    }
}
