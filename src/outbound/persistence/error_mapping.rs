//! Classification of pool and Diesel failures into repository errors.

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Pool failures mean the store is unreachable, regardless of variant.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    RepositoryError::unavailable(message)
}

/// Fixed messages substituted for the raw database error text, keeping
/// constraint names and SQL fragments out of client-visible errors.
pub(crate) struct ErrorContext {
    /// Message for a missing row.
    pub not_found: &'static str,
    /// Message for a unique-constraint rejection.
    pub unique: &'static str,
    /// Message for a foreign-key rejection.
    pub foreign_key: &'static str,
}

/// Classify a Diesel error using per-repository messages.
pub(crate) fn map_diesel_error(
    error: diesel::result::Error,
    context: &ErrorContext,
) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    } else {
        debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        );
    }

    match error {
        DieselError::NotFound => RepositoryError::not_found(context.not_found),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::conflict(context.unique)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            RepositoryError::conflict(context.foreign_key)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::unavailable("database connection closed")
        }
        _ => RepositoryError::unknown("database error"),
    }
}
