//! PostgreSQL persistence adapter built on Diesel.
//!
//! The adapter owns the SQL shape: table definitions in [`schema`], row
//! structs in [`models`], idempotent table creation in [`setup`], and one
//! repository per aggregate. All failures are classified into the domain's
//! [`RepositoryError`](crate::domain::ports::RepositoryError) variants by
//! [`error_mapping`].

mod diesel_category_repository;
mod diesel_product_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;
mod setup;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use setup::ensure_schema;
