use crate::backend::domain::validation::ValidationError;
use crate::backend::storage::PersistenceError;

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Failure of a user-facing operation
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Input rejected before any computation; the user should re-enter it
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The store could not be read or written; nothing was changed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Export failed: {0}")]
    Export(String),
}

impl DomainError {
    /// Individual messages, one per rejected field
    pub fn details(&self) -> Vec<String> {
        match self {
            DomainError::Validation(errors) => errors.iter().map(|e| e.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl From<Vec<ValidationError>> for DomainError {
    fn from(errors: Vec<ValidationError>) -> Self {
        DomainError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
