use thiserror::Error;

use crate::store::Scope;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("The path '{0}' is not valid.")]
    InvalidPath(String),
    #[error("Path {path} not found in {scope} PATH")]
    PathNotFound { path: String, scope: Scope },
    #[error("'{0}' does not name a file")]
    InvalidFileName(String),
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    #[error("{0}")]
    InvalidFlagCombination(String),
    #[error("Could not find {0} in PATH")]
    ExecutableNotFound(String),
    #[error("Path store error: {0}")]
    Store(#[from] crate::store::StoreError),
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::engine::EngineError> for AppError {
    fn from(err: crate::engine::EngineError) -> Self {
        match err {
            crate::engine::EngineError::InvalidPath(path) => AppError::InvalidPath(path),
        }
    }
}
