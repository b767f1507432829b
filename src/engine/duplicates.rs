use std::collections::HashMap;

use super::normalize_key;

//─────────────────────────────────────────────────────────────────────────────

/// A lower-cased entry together with the number of times it occurs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateRecord {
    pub key: String,
    pub count: usize,
}

/// Result of grouping the user and system lists case-insensitively.
///
/// `combined` groups the concatenation of both lists (user entries first),
/// so an entry present once in each scope shows up with a count of 2.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    pub combined: Vec<DuplicateRecord>,
    pub user: Vec<DuplicateRecord>,
    pub system: Vec<DuplicateRecord>,
}

impl DuplicateReport {
    pub fn has_duplicates(&self) -> bool {
        !self.combined.is_empty()
    }
}

/// Groups both scopes, each scope alone and the two together.
pub fn detect_duplicates<S: AsRef<str>>(user_paths: &[S], system_paths: &[S]) -> DuplicateReport {
    let combined = group_duplicates(user_paths.iter().chain(system_paths.iter()));

    DuplicateReport {
        combined,
        user: group_duplicates(user_paths.iter()),
        system: group_duplicates(system_paths.iter()),
    }
}

// Records keep the order in which each key was first seen.
fn group_duplicates<'a, S, I>(entries: I) -> Vec<DuplicateRecord>
where
    S: AsRef<str> + 'a,
    I: Iterator<Item = &'a S>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DuplicateRecord> = Vec::new();

    for entry in entries {
        let key = normalize_key(entry.as_ref());
        match positions.get(&key) {
            Some(&index) => groups[index].count += 1,
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(DuplicateRecord { key, count: 1 });
            }
        }
    }

    groups.retain(|record| record.count > 1);
    groups
}
