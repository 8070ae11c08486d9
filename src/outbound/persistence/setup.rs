//! Idempotent schema creation, run on every startup.

use diesel_async::SimpleAsyncConnection;

use crate::domain::ports::RepositoryError;

use super::error_mapping::map_pool_error;
use super::pool::DbPool;

/// Must stay in sync with the `table!` definitions in
/// [`schema`](super::schema). No `ON DELETE` action on the foreign key:
/// deleting a referenced category is rejected by PostgreSQL.
const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS categories (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    price INT NOT NULL,
    category_id UUID NOT NULL REFERENCES categories(id),
    created_at TIMESTAMPTZ NOT NULL
);
";

/// Create the catalogue tables when absent. Safe to run repeatedly.
///
/// # Errors
///
/// Returns [`RepositoryError::Unavailable`] when no connection can be
/// obtained and [`RepositoryError::Unknown`] when the statements fail.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), RepositoryError> {
    let mut conn = pool.get().await.map_err(map_pool_error)?;
    conn.batch_execute(SCHEMA_SQL)
        .await
        .map_err(|err| RepositoryError::unknown(format!("schema setup failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_statements_are_idempotent() {
        assert_eq!(SCHEMA_SQL.matches("CREATE TABLE IF NOT EXISTS").count(), 2);
    }

    #[test]
    fn foreign_key_has_no_cascade() {
        assert!(SCHEMA_SQL.contains("REFERENCES categories(id)"));
        assert!(!SCHEMA_SQL.contains("ON DELETE"));
    }
}
