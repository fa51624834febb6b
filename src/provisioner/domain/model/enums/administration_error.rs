use thiserror::Error;

/// Error kinds an administrative executor reports for a single statement.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AdministrationError {
    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Failed(String),
}
