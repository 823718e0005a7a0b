//! Shared error type across tallygate crates.

use thiserror::Error;

/// Machine-readable error kinds (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Construction argument outside the accepted domain.
    InvalidArgument,
    /// The gate already reached its target count.
    AlreadyCompleted,
}

impl ErrorKind {
    /// String representation used in logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::AlreadyCompleted => "ALREADY_COMPLETED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by the gate.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("First argument is expected to be a positive integer number")]
    InvalidTarget,
    #[error("Target count {target} has already been reached")]
    AlreadyComplete { target: usize },
}

impl TallyError {
    /// Map the error to a stable kind code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TallyError::InvalidTarget => ErrorKind::InvalidArgument,
            TallyError::AlreadyComplete { .. } => ErrorKind::AlreadyCompleted,
        }
    }
}
