/// Core error types for the music catalog
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the music catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up (`Music`, `Genre`)
        entity: String,
        /// Identifier that did not resolve
        id: String,
    },

    /// The store rejected a value (CHECK, NOT NULL or foreign key violation),
    /// or a request parameter is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (connectivity, driver failures, anything unclassified)
    #[error("Database error: {0}")]
    Database(String),
}

impl CatalogError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation => {
                    Self::InvalidArgument(db_err.message().to_string())
                }
                ErrorKind::UniqueViolation => Self::Duplicate(db_err.message().to_string()),
                _ => Self::Database(err.to_string()),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CatalogError::not_found("Music", 42);
        assert_eq!(err.to_string(), "Music not found: 42");
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn invalid_argument_display() {
        let err = CatalogError::invalid_argument("page size must be at least 1");
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Invalid argument: page size must be at least 1"
        );
    }

    #[cfg(feature = "sqlx-support")]
    #[test]
    fn non_database_sqlx_errors_map_to_database() {
        let err: CatalogError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, CatalogError::Database(_)));
    }
}
