pub mod api_client;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod health;
pub mod models;
pub mod proxy;
pub mod render;
pub mod types;

pub use error::{ContributorsError, Result};
