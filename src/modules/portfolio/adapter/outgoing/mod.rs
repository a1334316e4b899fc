pub mod sea_orm_entity;

mod portfolio_query_postgres;
mod portfolio_repository_postgres;
mod section_repository_postgres;
mod slug_generator_postgres;

pub use portfolio_query_postgres::PortfolioQueryPostgres;
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
pub use section_repository_postgres::SectionRepositoryPostgres;
pub use slug_generator_postgres::{SlugGeneratorPostgres, DEFAULT_SLUG_ATTEMPTS};
