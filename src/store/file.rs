//! A path store persisted as a small JSON document.
//!
//! Used wherever the host has no scoped PATH storage of its own. The
//! document holds one raw `;`-joined string per scope:
//!
//! ```json
//! { "user": "C:\\Tools", "system": "C:\\Windows;C:\\Windows\\System32" }
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use super::{PathStore, Scope, StoreError};
use crate::engine::PATH_SEPARATOR;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    user: String,
    #[serde(default)]
    system: String,
}

#[derive(Debug)]
pub struct FileStore {
    location: PathBuf,
    document: StoreDocument,
}

impl FileStore {
    /// Opens the document at `location`, seeding a missing document's
    /// system scope from the process `PATH`.
    pub fn open(location: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with_seed(location, &process_path_as_list())
    }

    /// Opens the document at `location`; a missing document starts with an
    /// empty user scope and `system_seed` as its system scope.
    pub fn open_with_seed(
        location: impl Into<PathBuf>,
        system_seed: &str,
    ) -> Result<Self, StoreError> {
        let location = location.into();
        let document = match fs::read_to_string(&location) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StoreError::Malformed(location.display().to_string(), e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoreDocument {
                user: String::new(),
                system: system_seed.to_string(),
            },
            Err(e) => return Err(StoreError::Io(location.display().to_string(), e)),
        };
        Ok(Self { location, document })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_err = |e| StoreError::Io(self.location.display().to_string(), e);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.location)
            .map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.document)
            .map_err(|e| StoreError::Malformed(self.location.display().to_string(), e))?;
        writer.flush().map_err(io_err)
    }
}

impl PathStore for FileStore {
    fn get_path(&self, scope: Scope) -> Result<String, StoreError> {
        Ok(match scope {
            Scope::User => self.document.user.clone(),
            Scope::System => self.document.system.clone(),
        })
    }

    fn set_path(&mut self, scope: Scope, raw: &str) -> Result<(), StoreError> {
        match scope {
            Scope::User => self.document.user = raw.to_string(),
            Scope::System => self.document.system = raw.to_string(),
        }
        self.persist()
    }
}

// The process PATH uses the platform separator; stored lists use `;`.
fn process_path_as_list() -> String {
    env::var_os("PATH")
        .map(|value| {
            env::split_paths(&value)
                .map(|p| p.to_string_lossy().into_owned())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(&PATH_SEPARATOR.to_string())
        })
        .unwrap_or_default()
}
