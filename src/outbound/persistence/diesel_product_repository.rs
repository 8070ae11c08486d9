//! PostgreSQL-backed `ProductRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::Product;
use crate::domain::ports::{ProductRepository, ProductUpdate, RepositoryError};

use super::error_mapping::{ErrorContext, map_diesel_error, map_pool_error};
use super::models::{NewProductRow, ProductChangeset, ProductRow};
use super::pool::DbPool;
use super::schema::products;

const PRODUCT_ERRORS: ErrorContext = ErrorContext {
    not_found: "product not found",
    unique: "product name already exists",
    foreign_key: "referenced category does not exist",
};

/// Diesel adapter for the product port. Each operation issues a single
/// statement; uniqueness and referential integrity are left to PostgreSQL.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn create(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(products::table)
            .values(NewProductRow::from(product))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, &PRODUCT_ERRORS))
    }

    async fn update(
        &self,
        id: Uuid,
        update: &ProductUpdate,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // RETURNING preserves the stored id and created_at in the response
        // without a second round trip.
        let row: ProductRow = diesel::update(products::table.find(id))
            .set(ProductChangeset::from(update))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, &PRODUCT_ERRORS))?;
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Zero affected rows is still success: deletion is idempotent.
        diesel::delete(products::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, &PRODUCT_ERRORS))
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductRow> = products::table
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, &PRODUCT_ERRORS))?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: ProductRow = products::table
            .find(id)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, &PRODUCT_ERRORS))?;
        Ok(row.into())
    }
}
