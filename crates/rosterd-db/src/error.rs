//! Database-specific error types and conversions.

use rosterd_core::error::RosterdError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Stored record is not decodable: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Duplicate record: {entity}")]
    Duplicate { entity: String },
}

impl DbError {
    /// Classify a statement error: unique-index violations become
    /// [`DbError::Duplicate`], everything else stays a plain
    /// database error.
    pub(crate) fn from_statement(entity: &str, err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        if msg.contains("already contains") {
            DbError::Duplicate {
                entity: entity.to_string(),
            }
        } else {
            DbError::Surreal(err)
        }
    }
}

impl From<DbError> for RosterdError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => RosterdError::NotFound { entity, id },
            DbError::Duplicate { entity } => RosterdError::AlreadyExists { entity },
            other => RosterdError::Database(other.to_string()),
        }
    }
}
