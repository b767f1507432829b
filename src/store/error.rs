use thiserror::Error;

/// Error type for reading and writing the scoped PATH strings.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error when reading or writing the backing document.
    #[error("Failed to access path store '{0}': {1}")]
    Io(String, std::io::Error),

    /// Error when the backing document is not valid JSON.
    #[error("Malformed path store '{0}': {1}")]
    Malformed(String, serde_json::Error),

    /// Error when a registry command could not be run or failed.
    #[cfg(any(windows, test))]
    #[error("Registry command failed: {0}")]
    Registry(String),
}
