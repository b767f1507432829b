use std::collections::HashMap;

use super::{PathStore, Scope, StoreError};

/// Store held entirely in memory; nothing outlives the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    paths: HashMap<Scope, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(user: &str, system: &str) -> Self {
        let mut paths = HashMap::new();
        paths.insert(Scope::User, user.to_string());
        paths.insert(Scope::System, system.to_string());
        Self { paths }
    }
}

impl PathStore for MemoryStore {
    fn get_path(&self, scope: Scope) -> Result<String, StoreError> {
        Ok(self.paths.get(&scope).cloned().unwrap_or_default())
    }

    fn set_path(&mut self, scope: Scope, raw: &str) -> Result<(), StoreError> {
        self.paths.insert(scope, raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_scope_reads_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get_path(Scope::User).unwrap(), "");
        assert!(store.get_all_paths(Scope::System).unwrap().is_empty());
    }

    #[test]
    fn all_paths_are_trimmed_and_non_empty() {
        let store = MemoryStore::with_paths(" C:\\A ;;  ;C:\\B;", "");
        assert_eq!(store.get_all_paths(Scope::User).unwrap(), vec!["C:\\A", "C:\\B"]);
    }

    #[test]
    fn set_replaces_only_the_given_scope() {
        let mut store = MemoryStore::with_paths("C:\\A", "C:\\S");
        store.set_path(Scope::User, "C:\\B").unwrap();
        assert_eq!(store.get_path(Scope::User).unwrap(), "C:\\B");
        assert_eq!(store.get_path(Scope::System).unwrap(), "C:\\S");
    }

    #[test]
    fn opposite_scope_flips() {
        assert_eq!(Scope::User.opposite(), Scope::System);
        assert_eq!(Scope::System.opposite(), Scope::User);
        assert_eq!(Scope::System.to_string(), "system");
    }
}
