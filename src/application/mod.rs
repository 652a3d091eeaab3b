//! Application services layer
//!
//! High-level services the command surface consumes.

pub mod auth_service;
pub mod portfolio_service;

pub use auth_service::AuthService;
pub use portfolio_service::PortfolioService;
