use thiserror::Error;

pub type ClimateResult<T> = Result<T, ClimateError>;

/// Crate-wide error taxonomy. Every variant is recoverable: a failed
/// operation reports and refuses the specific mutation, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClimateError {
    /// Bad user input: unparsable field text, empty or duplicate name.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation could not resolve its target record.
    #[error("{0}")]
    Identity(String),

    /// Malformed dataset payload at the import boundary.
    #[error("import failed: {0}")]
    Import(String),
}
