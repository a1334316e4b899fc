// src/modules/portfolio/application/session/builder_session.rs
//
// Server-side edit/save/publish workflow for one document. Edits go through
// the reducer and never fail; only load, save and publish touch the gateway.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::save_coordinator::{SaveCoordinator, SaveOutcome};
use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::{SessionProvider, UserProfileQuery};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioCommand, CreatePortfolioError, GetPortfoliosError, GetSinglePortfolioError,
    PublishPortfolioError, SyncSectionsError, UpdatePortfolioError,
};
use crate::modules::portfolio::application::ports::outgoing::{
    PatchField, PatchPortfolioData, PortfolioRecord,
};
use crate::modules::portfolio::application::service::DEFAULT_PORTFOLIO_TITLE;
use crate::modules::portfolio::application::PortfolioUseCases;
use crate::modules::portfolio::domain::section_store;
use crate::modules::portfolio::domain::{
    reduce, validate_for_publish, Document, EditAction, PortfolioStatus, PublishValidation,
    SectionContent, SectionId, SectionType,
};

//
// ──────────────────────────────────────────────────────────
// Status and errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved { at: DateTime<Utc> },
    Error { message: String },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Sign in to save your portfolio")]
    NotSignedIn,

    #[error("Portfolio not found")]
    NotFound,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Portfolio is incomplete")]
    Validation(PublishValidation),

    #[error("Section {0} appears more than once")]
    InvalidSections(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<CreatePortfolioError> for SessionError {
    fn from(e: CreatePortfolioError) -> Self {
        match e {
            CreatePortfolioError::ServiceUnavailable(msg) => SessionError::ServiceUnavailable(msg),
            CreatePortfolioError::RepositoryError(msg) => SessionError::Repository(msg),
        }
    }
}

impl From<GetPortfoliosError> for SessionError {
    fn from(e: GetPortfoliosError) -> Self {
        match e {
            GetPortfoliosError::ServiceUnavailable(msg) => SessionError::ServiceUnavailable(msg),
            GetPortfoliosError::RepositoryError(msg) => SessionError::Repository(msg),
        }
    }
}

impl From<GetSinglePortfolioError> for SessionError {
    fn from(e: GetSinglePortfolioError) -> Self {
        match e {
            GetSinglePortfolioError::NotFound => SessionError::NotFound,
            GetSinglePortfolioError::ServiceUnavailable(msg) => {
                SessionError::ServiceUnavailable(msg)
            }
            GetSinglePortfolioError::RepositoryError(msg) => SessionError::Repository(msg),
        }
    }
}

impl From<UpdatePortfolioError> for SessionError {
    fn from(e: UpdatePortfolioError) -> Self {
        match e {
            UpdatePortfolioError::NotFound => SessionError::NotFound,
            UpdatePortfolioError::ServiceUnavailable(msg) => SessionError::ServiceUnavailable(msg),
            UpdatePortfolioError::RepositoryError(msg) => SessionError::Repository(msg),
        }
    }
}

impl From<SyncSectionsError> for SessionError {
    fn from(e: SyncSectionsError) -> Self {
        match e {
            SyncSectionsError::NotFound => SessionError::NotFound,
            SyncSectionsError::DuplicateSection(id) => SessionError::InvalidSections(id),
            SyncSectionsError::ServiceUnavailable(msg) => SessionError::ServiceUnavailable(msg),
            SyncSectionsError::ReorderFailed(msg) => SessionError::Repository(msg),
            SyncSectionsError::RepositoryError(msg) => SessionError::Repository(msg),
        }
    }
}

impl From<PublishPortfolioError> for SessionError {
    fn from(e: PublishPortfolioError) -> Self {
        match e {
            PublishPortfolioError::NotFound => SessionError::NotFound,
            PublishPortfolioError::Validation(v) => SessionError::Validation(v),
            PublishPortfolioError::ServiceUnavailable(msg) => {
                SessionError::ServiceUnavailable(msg)
            }
            PublishPortfolioError::RepositoryError(msg) => SessionError::Repository(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────────────────
//

pub struct BuilderSession {
    /// Coordinator key until the document has its own id.
    key: Uuid,
    document: Document,
    dirty: bool,
    status: SaveStatus,

    use_cases: PortfolioUseCases,
    coordinator: Arc<SaveCoordinator>,
    session: Arc<dyn SessionProvider>,
    profiles: Arc<dyn UserProfileQuery>,

    user_profile: Arc<RwLock<Option<UserProfile>>>,
    prefetch: Option<JoinHandle<()>>,
}

impl BuilderSession {
    /// A session over an empty document. Call `start` or `open` to load one.
    pub fn new(
        use_cases: PortfolioUseCases,
        coordinator: Arc<SaveCoordinator>,
        session: Arc<dyn SessionProvider>,
        profiles: Arc<dyn UserProfileQuery>,
    ) -> Self {
        Self {
            key: Uuid::new_v4(),
            document: Document::default(),
            dirty: false,
            status: SaveStatus::Idle,
            use_cases,
            coordinator,
            session,
            profiles,
            user_profile: Arc::new(RwLock::new(None)),
            prefetch: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Anonymous sessions can edit but never persist.
    pub fn is_preview(&self) -> bool {
        self.session.current_user().is_none()
    }

    pub async fn user_profile(&self) -> Option<UserProfile> {
        self.user_profile.read().await.clone()
    }

    fn owner(&self) -> Result<UserId, SessionError> {
        self.session.current_user().ok_or(SessionError::NotSignedIn)
    }

    fn load(&mut self, document: Document) {
        self.document = reduce(std::mem::take(&mut self.document), EditAction::LoadDocument(document));
        self.dirty = false;
        self.status = SaveStatus::Idle;
    }

    //
    // ──────────────────────────────────────────────────────────
    // Load
    // ──────────────────────────────────────────────────────────
    //

    /// Loads the owner's most recently updated portfolio, creating one when
    /// there is none. Anonymous sessions stay on the empty preview document.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        let user = self.session.current_user();
        self.on_auth_change(user).await;

        let Some(owner) = user else {
            debug!("Builder session started in preview mode");
            return Ok(());
        };

        let latest = self.use_cases.get_list.execute(owner).await?.into_iter().next();

        match latest {
            Some(view) => {
                debug!(portfolio_id = %view.id, "Resuming latest portfolio");
                self.load(view.document);
            }
            None => {
                let title = self.default_title().await;
                let view = self
                    .use_cases
                    .create
                    .execute(CreatePortfolioCommand {
                        owner,
                        title,
                        document: Document::default(),
                    })
                    .await?;
                info!(portfolio_id = %view.id, "Created first portfolio for user");
                self.load(view.document);
            }
        }

        Ok(())
    }

    pub async fn open(&mut self, portfolio_id: Uuid) -> Result<(), SessionError> {
        let owner = self.owner()?;
        let view = self.use_cases.get_single.execute(owner, portfolio_id).await?;
        self.load(view.document);
        Ok(())
    }

    //
    // ──────────────────────────────────────────────────────────
    // Edits
    // ──────────────────────────────────────────────────────────
    //

    pub fn dispatch(&mut self, action: EditAction) {
        if action == EditAction::Unknown {
            debug!("Ignoring unknown edit action");
            return;
        }
        let replaces = matches!(
            action,
            EditAction::LoadDocument(_) | EditAction::ResetDocument(_)
        );
        let id = self.document.id;
        let slug = self.document.slug.clone();
        let status = self.document.status;

        self.document = reduce(std::mem::take(&mut self.document), action);
        self.dirty = true;

        // Once persisted, the open portfolio's identity is not editable.
        if replaces && id.is_some() {
            self.document.id = id;
            self.document.slug = slug;
            self.document.status = status;
        }
    }

    pub fn dispatch_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = EditAction>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    fn set_sections(&mut self, sections: Vec<crate::modules::portfolio::domain::Section>) {
        self.dispatch(EditAction::SetSections(sections));
    }

    pub fn add_section(&mut self, section_type: SectionType) -> SectionId {
        let section = section_store::create_section(section_type);
        let id = section.id;
        let mut sections = self.document.sections.clone();
        sections.push(section);
        self.set_sections(sections);
        id
    }

    pub fn remove_section(&mut self, id: SectionId) {
        let sections = section_store::remove_section(&self.document.sections, id);
        self.set_sections(sections);
    }

    pub fn toggle_section(&mut self, id: SectionId) {
        let sections = section_store::toggle_visibility(&self.document.sections, id);
        self.set_sections(sections);
    }

    pub fn move_section(&mut self, from: usize, to: usize) {
        let sections = section_store::reorder(&self.document.sections, from, to);
        self.set_sections(sections);
    }

    pub fn update_section_content(&mut self, id: SectionId, content: SectionContent) {
        let sections = section_store::update_content(&self.document.sections, id, content);
        self.set_sections(sections);
    }

    pub fn change_section_type(&mut self, id: SectionId, section_type: SectionType) {
        let sections = section_store::change_type(&self.document.sections, id, section_type);
        self.set_sections(sections);
    }

    pub fn rename_section(&mut self, id: SectionId, title: &str) {
        let sections = section_store::rename_section(&self.document.sections, id, title);
        self.set_sections(sections);
    }

    //
    // ──────────────────────────────────────────────────────────
    // Save / publish
    // ──────────────────────────────────────────────────────────
    //

    pub async fn save(&mut self) -> Result<SaveOutcome<Document>, SessionError> {
        let owner = self.owner()?;
        let key = self.document.id.unwrap_or(self.key);
        let title = self.default_title().await;
        let use_cases = self.use_cases.clone();

        self.status = SaveStatus::Saving;

        let result = self
            .coordinator
            .save(key, self.document.clone(), |snapshot| {
                persist(use_cases, owner, title, snapshot)
            })
            .await;

        match result {
            Ok(outcome) => {
                if let SaveOutcome::Saved(saved) = &outcome {
                    self.document.id = saved.id;
                    self.document.slug = saved.slug.clone();
                }
                self.dirty = false;
                self.status = SaveStatus::Saved { at: Utc::now() };
                Ok(outcome)
            }
            Err(e) => {
                self.status = SaveStatus::Error {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Saves when there is something to save. Failures only show in `status`.
    pub async fn autosave_tick(&mut self) -> bool {
        if !self.dirty || self.is_preview() {
            return false;
        }

        match self.save().await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Autosave failed");
                false
            }
        }
    }

    /// Validates locally, saves, then asks the gateway to publish.
    pub async fn publish(&mut self) -> Result<PortfolioRecord, SessionError> {
        let owner = self.owner()?;

        let validation = validate_for_publish(&self.document);
        if !validation.valid {
            return Err(SessionError::Validation(validation));
        }

        self.save().await?;

        let portfolio_id = self
            .document
            .id
            .ok_or_else(|| SessionError::Repository("portfolio has no id after save".into()))?;

        let record = self.use_cases.publish.execute(owner, portfolio_id).await?;
        self.document.status = PortfolioStatus::Published;
        Ok(record)
    }

    //
    // ──────────────────────────────────────────────────────────
    // Identity
    // ──────────────────────────────────────────────────────────
    //

    /// Starts fetching the signed-in user's profile in the background, or
    /// clears it on sign-out.
    pub async fn on_auth_change(&mut self, user: Option<UserId>) {
        if let Some(previous) = self.prefetch.take() {
            previous.abort();
        }

        match user {
            Some(user_id) => {
                let profiles = self.profiles.clone();
                let slot = self.user_profile.clone();
                self.prefetch = Some(tokio::spawn(async move {
                    match profiles.find_by_id(user_id).await {
                        Ok(profile) => *slot.write().await = profile,
                        Err(e) => warn!(user_id = %user_id, error = %e, "Profile prefetch failed"),
                    }
                }));
            }
            None => {
                *self.user_profile.write().await = None;
            }
        }
    }

    /// "<full name> Portfolio", once any pending profile fetch has finished.
    async fn default_title(&mut self) -> String {
        if let Some(prefetch) = self.prefetch.take() {
            let _ = prefetch.await;
        }

        match self.user_profile.read().await.as_ref() {
            Some(profile) if !profile.full_name.trim().is_empty() => {
                format!("{} Portfolio", profile.full_name.trim())
            }
            _ => DEFAULT_PORTFOLIO_TITLE.to_string(),
        }
    }
}

/// Creates the portfolio on first save; afterwards overwrites every field
/// and syncs sections. Safe to retry.
async fn persist(
    use_cases: PortfolioUseCases,
    owner: UserId,
    title: String,
    snapshot: Document,
) -> Result<Document, SessionError> {
    if let Some(id) = section_store::first_duplicate(&snapshot.sections) {
        return Err(SessionError::InvalidSections(id.to_string()));
    }

    let Some(portfolio_id) = snapshot.id else {
        let view = use_cases
            .create
            .execute(CreatePortfolioCommand {
                owner,
                title,
                document: snapshot,
            })
            .await?;
        return Ok(view.document);
    };

    let patch = PatchPortfolioData {
        title: PatchField::Unset,
        template_id: match snapshot.template.id {
            Some(id) => PatchField::Value(id),
            None => PatchField::Null,
        },
        profile: PatchField::Value(snapshot.profile.clone()),
        design: PatchField::Value(snapshot.design.clone()),
    };

    use_cases.update.execute(owner, portfolio_id, patch).await?;
    use_cases
        .sync_sections
        .execute(owner, portfolio_id, snapshot.sections.clone())
        .await?;

    Ok(snapshot)
}

/// Runs `autosave_tick` every `every` until the handle is aborted.
pub fn spawn_autosave(session: Arc<Mutex<BuilderSession>>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick completes immediately.
        interval.tick().await;

        loop {
            interval.tick().await;
            session.lock().await.autosave_tick().await;
        }
    })
}
