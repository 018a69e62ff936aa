pub mod analyzer;
pub mod api;
pub mod app_state;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod repositories;
