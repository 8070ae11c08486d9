//! Domain ports for catalogue persistence.
//!
//! Repositories expose a tagged [`RepositoryError`] so adapters classify
//! their failures (conflict, not-found, unavailable, unknown) instead of
//! collapsing everything into one opaque error. The HTTP adapter relies on
//! these tags to pick status codes.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::{Category, Product};

/// Failure classes surfaced by persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A uniqueness or referential-integrity rule rejected the write.
    #[error("conflicting write: {message}")]
    Conflict { message: String },
    /// The requested row does not exist.
    #[error("record not found: {message}")]
    NotFound { message: String },
    /// The store could not be reached (pool checkout, dropped connection).
    #[error("store unavailable: {message}")]
    Unavailable { message: String },
    /// Anything the adapter could not classify.
    #[error("storage failure: {message}")]
    Unknown { message: String },
}

impl RepositoryError {
    /// Constraint-violation constructor.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Missing-row constructor.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Connectivity-failure constructor.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Catch-all constructor.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }
}

/// Mutable fields of a product, applied as a full replacement.
///
/// The identifier and creation timestamp of the target row are preserved by
/// the adapter; only these columns change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub category_id: Uuid,
}

/// Persistence port for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a fully formed product.
    ///
    /// Fails with [`RepositoryError::Conflict`] when the name is taken or the
    /// category reference does not resolve.
    async fn create(&self, product: &Product) -> Result<(), RepositoryError>;

    /// Replace all mutable fields of the product with the given id and
    /// return the updated entity.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no row matches.
    async fn update(&self, id: Uuid, update: &ProductUpdate)
    -> Result<Product, RepositoryError>;

    /// Delete by identifier. Succeeds even when no row matched, so deletion
    /// is idempotent from the caller's perspective.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Return every product in the store's natural scan order. Callers must
    /// not rely on any particular ordering.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Fetch one product, failing with [`RepositoryError::NotFound`] when
    /// absent.
    async fn get(&self, id: Uuid) -> Result<Product, RepositoryError>;
}

/// Persistence port for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a fully formed category; fails with
    /// [`RepositoryError::Conflict`] when the name is taken.
    async fn create(&self, category: &Category) -> Result<(), RepositoryError>;

    /// Return every category in natural scan order.
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;
}
