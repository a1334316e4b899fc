mod apply_edits;
mod create_portfolio;
mod delete_portfolio;
mod get_portfolios;
mod get_public_portfolio;
mod get_single_portfolio;
mod patch_portfolio;
mod preview_portfolio;
mod public_page;
mod publish_portfolio;
mod sync_sections;

pub use apply_edits::apply_edits_handler;
pub use create_portfolio::create_portfolio_handler;
pub use delete_portfolio::delete_portfolio_handler;
pub use get_portfolios::get_portfolios_handler;
pub use get_public_portfolio::get_public_portfolio_handler;
pub use get_single_portfolio::get_single_portfolio_handler;
pub use patch_portfolio::patch_portfolio_handler;
pub use preview_portfolio::preview_portfolio_handler;
pub use public_page::public_page_handler;
pub use publish_portfolio::publish_portfolio_handler;
pub use sync_sections::sync_sections_handler;
