use thiserror::Error;

/// Error type for path set engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The candidate is neither `.` nor an existing file or directory.
    #[error("The path '{0}' is not valid.")]
    InvalidPath(String),
}
