use super::traits::RecordKind;

/// The backing medium could not be read or written
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Storage location {location} is unavailable: {source}")]
    Unavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt {kind} row {row}: {reason}")]
    Corrupt {
        kind: RecordKind,
        row: usize,
        reason: String,
    },

    #[error("In-memory store lock was poisoned")]
    Poisoned,
}
