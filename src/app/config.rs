//! Resolves runtime settings from the parsed command line and environment.

use std::env;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::error::AppError;
use crate::store::{FileStore, PathStore};

/// File name used for the JSON store when no location is configured.
pub const DEFAULT_STORE_FILE: &str = ".pathtool.json";

/// Where the scoped PATH strings live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// A JSON document at the given location.
    File(PathBuf),
    /// The Windows registry.
    #[cfg(windows)]
    Registry,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub backend: StoreBackend,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
    pub cwd: PathBuf,
}

impl Settings {
    /// Builds settings from the command line, the working directory and the
    /// platform's notion of the home directory.
    ///
    /// # Errors
    /// Returns `AppError::Io` if the working directory cannot be determined.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let cwd = env::current_dir()?;
        let home = dirs::home_dir();

        Ok(Self {
            backend: select_backend(cli.store.as_deref(), home.as_deref(), &cwd),
            log_file: cli.log_file.clone(),
            quiet: cli.quiet,
            cwd,
        })
    }

    /// Opens the configured store.
    pub fn open_store(&self) -> Result<Box<dyn PathStore>, AppError> {
        match &self.backend {
            StoreBackend::File(location) => Ok(Box::new(FileStore::open(location.clone())?)),
            #[cfg(windows)]
            StoreBackend::Registry => Ok(Box::new(crate::store::RegistryStore::new())),
        }
    }
}

// An explicit store file always wins; Windows otherwise uses the registry.
fn select_backend(explicit: Option<&Path>, home: Option<&Path>, cwd: &Path) -> StoreBackend {
    match explicit {
        Some(location) => StoreBackend::File(location.to_path_buf()),
        None => platform_default(home, cwd),
    }
}

#[cfg(windows)]
fn platform_default(_home: Option<&Path>, _cwd: &Path) -> StoreBackend {
    StoreBackend::Registry
}

#[cfg(not(windows))]
fn platform_default(home: Option<&Path>, cwd: &Path) -> StoreBackend {
    StoreBackend::File(home.unwrap_or(cwd).join(DEFAULT_STORE_FILE))
}
