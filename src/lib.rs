//! Bookish - book catalog API
//!
//! A small REST JSON API over a catalog of books persisted in a single
//! JSON file: list, lookup by id, sort by field, and add with duplicate
//! detection.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire services over `store`.
    pub fn new(store: Arc<dyn repository::CatalogStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(store)),
        }
    }
}
