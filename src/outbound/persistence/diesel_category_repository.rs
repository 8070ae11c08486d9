//! PostgreSQL-backed `CategoryRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Category;
use crate::domain::ports::{CategoryRepository, RepositoryError};

use super::error_mapping::{ErrorContext, map_diesel_error, map_pool_error};
use super::models::{CategoryRow, NewCategoryRow};
use super::pool::DbPool;
use super::schema::categories;

const CATEGORY_ERRORS: ErrorContext = ErrorContext {
    not_found: "category not found",
    unique: "category name already exists",
    foreign_key: "category is referenced by existing products",
};

/// Diesel adapter for the category port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn create(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(categories::table)
            .values(NewCategoryRow::from(category))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, &CATEGORY_ERRORS))
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, &CATEGORY_ERRORS))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unique_violations_name_the_category() {
        let err = map_diesel_error(
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                Box::new("duplicate key value".to_owned()),
            ),
            &CATEGORY_ERRORS,
        );
        assert_eq!(
            err,
            RepositoryError::conflict("category name already exists")
        );
    }
}
