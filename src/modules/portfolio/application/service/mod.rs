mod create_portfolio_service;
mod delete_portfolio_service;
mod get_portfolios_service;
mod get_public_portfolio_service;
mod get_single_portfolio_service;
mod publish_portfolio_service;
mod sync_sections_service;
mod update_portfolio_service;

pub use create_portfolio_service::{CreatePortfolioService, DEFAULT_PORTFOLIO_TITLE};
pub use delete_portfolio_service::DeletePortfolioService;
pub use get_portfolios_service::GetPortfoliosService;
pub use get_public_portfolio_service::GetPublicPortfolioService;
pub use get_single_portfolio_service::GetSinglePortfolioService;
pub use publish_portfolio_service::PublishPortfolioService;
pub use sync_sections_service::SyncSectionsService;
pub use update_portfolio_service::UpdatePortfolioService;
