use async_trait::async_trait;
use tracing::warn;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    CreatePortfolioCommand, CreatePortfolioError, CreatePortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioData, PortfolioRepository, PortfolioRepositoryError, PortfolioView,
    SectionRepository, SectionRepositoryError, SlugGenerator, SlugGeneratorError,
};

pub const DEFAULT_PORTFOLIO_TITLE: &str = "My Portfolio";

// A generated slug can still lose an insert race against another request.
const MAX_SLUG_ATTEMPTS: usize = 3;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreatePortfolioService<R, S, G>
where
    R: PortfolioRepository,
    S: SectionRepository,
    G: SlugGenerator,
{
    portfolio_repository: R,
    section_repository: S,
    slug_generator: G,
}

impl<R, S, G> CreatePortfolioService<R, S, G>
where
    R: PortfolioRepository,
    S: SectionRepository,
    G: SlugGenerator,
{
    pub fn new(portfolio_repository: R, section_repository: S, slug_generator: G) -> Self {
        Self {
            portfolio_repository,
            section_repository,
            slug_generator,
        }
    }
}

#[async_trait]
impl<R, S, G> CreatePortfolioUseCase for CreatePortfolioService<R, S, G>
where
    R: PortfolioRepository + Send + Sync,
    S: SectionRepository + Send + Sync,
    G: SlugGenerator + Send + Sync,
{
    async fn execute(
        &self,
        command: CreatePortfolioCommand,
    ) -> Result<PortfolioView, CreatePortfolioError> {
        let title = match command.title.trim() {
            "" => DEFAULT_PORTFOLIO_TITLE.to_string(),
            t => t.to_string(),
        };
        let document = command.document;

        let mut attempt = 0;
        let record = loop {
            attempt += 1;

            let slug = self
                .slug_generator
                .generate(&title, command.owner)
                .await
                .map_err(map_slug_error)?;

            let data = CreatePortfolioData {
                owner: command.owner,
                title: title.clone(),
                slug: slug.clone(),
                template_id: document.template.id,
                profile: document.profile.clone(),
                design: document.design.clone(),
            };

            match self.portfolio_repository.create_portfolio(data).await {
                Ok(record) => break record,
                Err(PortfolioRepositoryError::SlugAlreadyExists) if attempt < MAX_SLUG_ATTEMPTS => {
                    warn!(slug = %slug, attempt, "Slug taken between check and insert, retrying");
                }
                Err(e) => return Err(map_repository_error(e)),
            }
        };

        for (index, section) in document.sections.iter().enumerate() {
            self.section_repository
                .create_section(record.id, section, index as i32)
                .await
                .map_err(map_section_error)?;
        }

        Ok(PortfolioView::from_record(
            record,
            document.template,
            document.sections,
        ))
    }
}

fn map_slug_error(e: SlugGeneratorError) -> CreatePortfolioError {
    match e {
        SlugGeneratorError::ServiceUnavailable(msg) => CreatePortfolioError::ServiceUnavailable(msg),
        SlugGeneratorError::DatabaseError(msg) => CreatePortfolioError::RepositoryError(msg),
        SlugGeneratorError::Exhausted(base) => {
            CreatePortfolioError::RepositoryError(format!("no free slug for '{}'", base))
        }
    }
}

fn map_repository_error(e: PortfolioRepositoryError) -> CreatePortfolioError {
    match e {
        PortfolioRepositoryError::ServiceUnavailable(msg) => {
            CreatePortfolioError::ServiceUnavailable(msg)
        }
        PortfolioRepositoryError::DatabaseError(msg) => CreatePortfolioError::RepositoryError(msg),
        PortfolioRepositoryError::SerializationError(msg) => {
            CreatePortfolioError::RepositoryError(msg)
        }
        PortfolioRepositoryError::SlugAlreadyExists => CreatePortfolioError::RepositoryError(
            "slug still taken after retries".to_string(),
        ),
        // Defensive: should never happen on create
        PortfolioRepositoryError::NotFound => CreatePortfolioError::RepositoryError(
            "unexpected not found while creating portfolio".to_string(),
        ),
    }
}

fn map_section_error(e: SectionRepositoryError) -> CreatePortfolioError {
    match e {
        SectionRepositoryError::ServiceUnavailable(msg) => {
            CreatePortfolioError::ServiceUnavailable(msg)
        }
        other => CreatePortfolioError::RepositoryError(other.to_string()),
    }
}
