//! Infrastructure layer
//!
//! Transport-facing adapters consumed by the application services.

pub mod http;
