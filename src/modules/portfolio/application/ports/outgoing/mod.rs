pub mod portfolio_query;
pub mod portfolio_repository;
pub mod section_repository;
pub mod slug_generator;

pub use portfolio_query::{PortfolioQuery, PortfolioQueryError, PortfolioView};
pub use portfolio_repository::{
    CreatePortfolioData, PatchField, PatchPortfolioData, PortfolioRecord, PortfolioRepository,
    PortfolioRepositoryError,
};
pub use section_repository::{SectionOrder, SectionRepository, SectionRepositoryError};
pub use slug_generator::{SlugGenerator, SlugGeneratorError};
