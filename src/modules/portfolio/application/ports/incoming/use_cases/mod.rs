mod create_portfolio;
mod delete_portfolio;
mod get_portfolios;
mod get_public_portfolio;
mod get_single_portfolio;
mod publish_portfolio;
mod sync_sections;
mod update_portfolio;

pub use create_portfolio::{CreatePortfolioCommand, CreatePortfolioError, CreatePortfolioUseCase};
pub use delete_portfolio::{DeletePortfolioError, DeletePortfolioUseCase};
pub use get_portfolios::{GetPortfoliosError, GetPortfoliosUseCase};
pub use get_public_portfolio::{GetPublicPortfolioError, GetPublicPortfolioUseCase};
pub use get_single_portfolio::{GetSinglePortfolioError, GetSinglePortfolioUseCase};
pub use publish_portfolio::{PublishPortfolioError, PublishPortfolioUseCase};
pub use sync_sections::{SyncSectionsError, SyncSectionsUseCase, SyncSummary};
pub use update_portfolio::{UpdatePortfolioError, UpdatePortfolioUseCase};
