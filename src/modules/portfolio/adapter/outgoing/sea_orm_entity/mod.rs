pub mod portfolio_sections;
pub mod portfolios;
