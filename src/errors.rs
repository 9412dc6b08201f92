use thiserror::Error;

/// Failures reported by the decorator machinery itself.
///
/// Errors raised inside a guarded block are not listed here; they belong to
/// the concrete decorator (`ContextDecorator::Error`).
#[derive(Debug, Error)]
pub enum DecoError {
    // The overloaded constructor got something other than a callable
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Keyword configuration did not fit the decorator's fields
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecoError>;
