//! # gp-core
//!
//! Core domain models and business logic for GeoPortfolio.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the project record, the category registry, the catalog filter, the selection
//! state, and the user-form validation rules. Fetching, caching, and the command
//! surface live in the application crate.

// Public module exports
pub mod category;
pub mod filter;
pub mod project;
pub mod selection;
pub mod validation;

// Re-export commonly used types at the crate root
pub use category::{registry, Category, KEY_HIGHLIGHTS_ID};
pub use filter::filter_projects;
pub use project::Project;
pub use selection::SelectionState;
pub use validation::{FieldError, FileMeta, SubmittedUserData, UserForm};
