pub mod client;
pub mod token;

pub use client::HttpClient;
pub use token::TokenStore;
