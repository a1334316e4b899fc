pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory_portfolios;
pub mod portfolio_fixtures;
pub mod stubs;
