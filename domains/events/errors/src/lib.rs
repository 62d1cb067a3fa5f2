use common_errors::AppError;
use sql_connection::{PgError, PoolError};
use thiserror::Error;

/// Rejections raised before any statement is executed. The `Display` text
/// is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name, date and location are required.")]
    MissingCreateFields,
    #[error("All fields are required.")]
    MissingUpdateFields,
    #[error("Invalid ID for delete.")]
    InvalidDeleteId,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Database error: {}", pg_message(.0))]
    Database(#[from] PgError),
    #[error("Connection error: {0}")]
    Connection(#[from] PoolError),
    #[error("Event not found: {event_id}")]
    NotFound { event_id: i64 },
}

impl EventError {
    /// Pool checkout failures mean the database is unreachable; those abort
    /// the request instead of landing in the banner. Everything else is
    /// handed back to be shown to the user.
    pub fn into_recoverable(self) -> Result<Self, AppError> {
        match self {
            Self::Connection(pool_err) => {
                Err(AppError::internal_server_error(&format!(
                    "Database connection failed: {pool_err}"
                )))
            }
            other => Ok(other),
        }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound { .. }) }
}

fn pg_message(err: &PgError) -> String {
    err.as_db_error()
        .map(|db| db.message().to_string())
        .unwrap_or_else(|| err.to_string())
}
