pub mod portfolio_use_cases;
pub mod ports;
pub mod service;
pub mod session;

pub use portfolio_use_cases::PortfolioUseCases;
