//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the domain ports and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::{CategoryRepository, ProductRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Product persistence port.
    pub products: Arc<dyn ProductRepository>,
    /// Category persistence port.
    pub categories: Arc<dyn CategoryRepository>,
}

impl HttpState {
    /// Bundle the repository ports for handler injection.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }
}
