//! Error mapping and query helpers shared by the Diesel adapters.

use tracing::debug;

use crate::domain::ports::WorkshopRepositoryError;

use super::pool::PoolError;

impl From<PoolError> for WorkshopRepositoryError {
    fn from(error: PoolError) -> Self {
        match error {
            PoolError::Checkout { message } | PoolError::Build { message } => {
                Self::connection(message)
            }
        }
    }
}

impl From<diesel::result::Error> for WorkshopRepositoryError {
    fn from(error: diesel::result::Error) -> Self {
        map_diesel_error(error)
    }
}

/// Closed connections become connection errors; everything else is a query
/// error carrying the driver's message.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> WorkshopRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            WorkshopRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            WorkshopRepositoryError::query(info.message())
        }
        DieselError::NotFound => WorkshopRepositoryError::query("record not found"),
        other => {
            debug!(error = %other, "diesel operation failed");
            WorkshopRepositoryError::query(other.to_string())
        }
    }
}

/// `ILIKE` pattern matching `needle` anywhere, with wildcards in the input
/// taken literally. PostgreSQL's default `LIKE` escape character is `\`.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
