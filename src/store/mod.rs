// error module
mod error;
// JSON document backed store
mod file;
// in-memory store
#[cfg(test)]
mod memory;
// Windows registry store
#[cfg(any(windows, test))]
mod registry;

use std::fmt;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports of the store backends.
//─────────────────────────────────────────────────────────────────────────────
pub use error::StoreError;
pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;
#[cfg(windows)]
pub use registry::RegistryStore;

use crate::engine::parse_path_list;

/// Which half of the PATH environment variable an entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    User,
    System,
}

impl Scope {
    pub fn opposite(self) -> Scope {
        match self {
            Scope::User => Scope::System,
            Scope::System => Scope::User,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scope::User => "user",
            Scope::System => "system",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Access to the scoped raw PATH strings.
///
/// Writes are last-write-wins; implementations do no locking.
pub trait PathStore {
    /// Current raw `;`-joined string for `scope`; empty when unset.
    fn get_path(&self, scope: Scope) -> Result<String, StoreError>;

    /// Replaces the raw string for `scope`.
    fn set_path(&mut self, scope: Scope, raw: &str) -> Result<(), StoreError>;

    /// Non-empty, trimmed entries of `scope` in stored order.
    fn get_all_paths(&self, scope: Scope) -> Result<Vec<String>, StoreError> {
        Ok(parse_path_list(&self.get_path(scope)?))
    }
}
