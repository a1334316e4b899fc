// Shared in-process store behind the portfolio ports. Clones share state,
// so one instance can back every service of a `PortfolioUseCases` bundle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, PatchField, PatchPortfolioData, PortfolioQuery, PortfolioQueryError,
    PortfolioRecord, PortfolioRepository, PortfolioRepositoryError, PortfolioView,
    SectionOrder, SectionRepository, SectionRepositoryError, SlugGenerator, SlugGeneratorError,
};
use crate::modules::portfolio::application::service::{
    CreatePortfolioService, DeletePortfolioService, GetPortfoliosService,
    GetPublicPortfolioService, GetSinglePortfolioService, PublishPortfolioService,
    SyncSectionsService, UpdatePortfolioService,
};
use crate::modules::portfolio::application::PortfolioUseCases;
use crate::modules::portfolio::domain::slug::{base_slug, slug_candidate};
use crate::modules::portfolio::domain::{PortfolioStatus, Section, SectionId, TemplateRef};

const UNAVAILABLE: &str = "connection refused";

#[derive(Default)]
struct State {
    rows: Vec<PortfolioRecord>,
    sections: HashMap<Uuid, Vec<(i32, Section)>>,
    unavailable: bool,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryPortfolios {
    state: Arc<Mutex<State>>,
}

impl InMemoryPortfolios {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Every port call fails with a connection error while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state().unavailable = unavailable;
    }

    pub fn len(&self) -> usize {
        self.state().rows.len()
    }

    /// Count of successful write calls across all ports.
    pub fn writes(&self) -> usize {
        self.state().writes
    }

    /// Stores a row as-is, bypassing slug generation and write counting.
    pub fn seed(&self, record: PortfolioRecord, sections: Vec<Section>) {
        let mut state = self.state();
        let rows = sections
            .into_iter()
            .enumerate()
            .map(|(i, s)| (i as i32, s))
            .collect();
        state.sections.insert(record.id, rows);
        state.rows.push(record);
    }

    pub fn record(&self, id: Uuid) -> Option<PortfolioRecord> {
        self.state().rows.iter().find(|r| r.id == id).cloned()
    }

    pub fn stored_sections(&self, id: Uuid) -> Vec<Section> {
        sorted_sections(&self.state(), id)
    }

    pub fn use_cases(&self) -> PortfolioUseCases {
        PortfolioUseCases {
            create: Arc::new(CreatePortfolioService::new(
                self.clone(),
                self.clone(),
                self.clone(),
            )),
            get_list: Arc::new(GetPortfoliosService::new(self.clone())),
            get_single: Arc::new(GetSinglePortfolioService::new(self.clone())),
            get_public: Arc::new(GetPublicPortfolioService::new(self.clone())),
            update: Arc::new(UpdatePortfolioService::new(self.clone())),
            publish: Arc::new(PublishPortfolioService::new(self.clone(), self.clone())),
            sync_sections: Arc::new(SyncSectionsService::new(self.clone(), self.clone())),
            delete: Arc::new(DeletePortfolioService::new(self.clone())),
        }
    }

    fn view(state: &State, record: &PortfolioRecord) -> PortfolioView {
        let template = match record.template_id {
            Some(id) => TemplateRef {
                id: Some(id),
                ..Default::default()
            },
            None => TemplateRef::default(),
        };
        PortfolioView::from_record(record.clone(), template, sorted_sections(state, record.id))
    }
}

fn sorted_sections(state: &State, id: Uuid) -> Vec<Section> {
    let mut rows = state.sections.get(&id).cloned().unwrap_or_default();
    rows.sort_by_key(|(order, _)| *order);
    rows.into_iter().map(|(_, s)| s).collect()
}

#[async_trait]
impl PortfolioQuery for InMemoryPortfolios {
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<PortfolioView>, PortfolioQueryError> {
        let state = self.state();
        if state.unavailable {
            return Err(PortfolioQueryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        let mut rows: Vec<&PortfolioRecord> =
            state.rows.iter().filter(|r| r.owner == owner).collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows.into_iter().map(|r| Self::view(&state, r)).collect())
    }

    async fn get_by_id(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioView, PortfolioQueryError> {
        let state = self.state();
        if state.unavailable {
            return Err(PortfolioQueryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        state
            .rows
            .iter()
            .find(|r| r.id == portfolio_id && r.owner == owner)
            .map(|r| Self::view(&state, r))
            .ok_or(PortfolioQueryError::NotFound)
    }

    async fn get_published_by_slug(&self, slug: &str) -> Result<PortfolioView, PortfolioQueryError> {
        let state = self.state();
        if state.unavailable {
            return Err(PortfolioQueryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        state
            .rows
            .iter()
            .find(|r| r.slug == slug && r.status == PortfolioStatus::Published)
            .map(|r| Self::view(&state, r))
            .ok_or(PortfolioQueryError::NotFound)
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolios {
    async fn create_portfolio(
        &self,
        data: CreatePortfolioData,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(PortfolioRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        if state.rows.iter().any(|r| r.slug == data.slug) {
            return Err(PortfolioRepositoryError::SlugAlreadyExists);
        }

        let now = Utc::now();
        let record = PortfolioRecord {
            id: Uuid::new_v4(),
            owner: data.owner,
            title: data.title,
            slug: data.slug,
            template_id: data.template_id,
            profile: data.profile,
            design: data.design,
            status: PortfolioStatus::Draft,
            published_at: None,
            created_at: now,
            updated_at: now,
        };
        state.rows.push(record.clone());
        state.writes += 1;
        Ok(record)
    }

    async fn patch_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
        data: PatchPortfolioData,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(PortfolioRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        let row = state
            .rows
            .iter_mut()
            .find(|r| r.id == portfolio_id && r.owner == owner)
            .ok_or(PortfolioRepositoryError::NotFound)?;

        if let PatchField::Value(title) = data.title {
            row.title = title;
        }
        match data.template_id {
            PatchField::Unset => {}
            PatchField::Null => row.template_id = None,
            PatchField::Value(id) => row.template_id = Some(id),
        }
        if let PatchField::Value(profile) = data.profile {
            row.profile = profile;
        }
        if let PatchField::Value(design) = data.design {
            row.design = design;
        }
        row.updated_at = Utc::now();

        let record = row.clone();
        state.writes += 1;
        Ok(record)
    }

    async fn publish_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<PortfolioRecord, PortfolioRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(PortfolioRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        let row = state
            .rows
            .iter_mut()
            .find(|r| r.id == portfolio_id && r.owner == owner)
            .ok_or(PortfolioRepositoryError::NotFound)?;

        let now = Utc::now();
        row.status = PortfolioStatus::Published;
        row.published_at = Some(now);
        row.updated_at = now;

        let record = row.clone();
        state.writes += 1;
        Ok(record)
    }

    async fn delete_portfolio(
        &self,
        owner: UserId,
        portfolio_id: Uuid,
    ) -> Result<(), PortfolioRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(PortfolioRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        let before = state.rows.len();
        state
            .rows
            .retain(|r| !(r.id == portfolio_id && r.owner == owner));
        if state.rows.len() == before {
            return Err(PortfolioRepositoryError::NotFound);
        }
        state.sections.remove(&portfolio_id);
        state.writes += 1;
        Ok(())
    }
}

#[async_trait]
impl SectionRepository for InMemoryPortfolios {
    async fn create_section(
        &self,
        portfolio_id: Uuid,
        section: &Section,
        sort_order: i32,
    ) -> Result<(), SectionRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(SectionRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        state
            .sections
            .entry(portfolio_id)
            .or_default()
            .push((sort_order, section.clone()));
        state.writes += 1;
        Ok(())
    }

    async fn update_section(
        &self,
        portfolio_id: Uuid,
        section: &Section,
    ) -> Result<(), SectionRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(SectionRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        let slot = state
            .sections
            .get_mut(&portfolio_id)
            .and_then(|rows| rows.iter_mut().find(|(_, s)| s.id == section.id))
            .ok_or(SectionRepositoryError::NotFound)?;
        slot.1 = section.clone();
        state.writes += 1;
        Ok(())
    }

    async fn delete_section(
        &self,
        portfolio_id: Uuid,
        section_id: SectionId,
    ) -> Result<(), SectionRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(SectionRepositoryError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        if let Some(rows) = state.sections.get_mut(&portfolio_id) {
            rows.retain(|(_, s)| s.id != section_id);
        }
        state.writes += 1;
        Ok(())
    }

    async fn reorder_sections(
        &self,
        portfolio_id: Uuid,
        order: Vec<SectionOrder>,
    ) -> Result<(), SectionRepositoryError> {
        let mut state = self.state();
        if state.unavailable {
            return Err(SectionRepositoryError::ReorderFailed {
                failed: order.len(),
                total: order.len(),
                reason: UNAVAILABLE.into(),
            });
        }
        if let Some(rows) = state.sections.get_mut(&portfolio_id) {
            for entry in &order {
                if let Some(row) = rows.iter_mut().find(|(_, s)| s.id == entry.id) {
                    row.0 = entry.sort_order;
                }
            }
        }
        state.writes += 1;
        Ok(())
    }
}

#[async_trait]
impl SlugGenerator for InMemoryPortfolios {
    async fn generate(&self, title: &str, owner: UserId) -> Result<String, SlugGeneratorError> {
        let state = self.state();
        if state.unavailable {
            return Err(SlugGeneratorError::ServiceUnavailable(UNAVAILABLE.into()));
        }
        let base = base_slug(title, owner.value());
        (1..=50)
            .map(|attempt| slug_candidate(&base, attempt))
            .find(|candidate| !state.rows.iter().any(|r| &r.slug == candidate))
            .ok_or(SlugGeneratorError::Exhausted(base))
    }
}
