use std::collections::HashSet;
use std::path::Path;

use super::error::EngineError;
use super::resolve::resolve_candidate_path;
use super::{normalize_key, path_key, PATH_SEPARATOR};

//─────────────────────────────────────────────────────────────────────────────

/// Why an insertion was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyInScope,
    AlreadyInOppositeScope,
}

/// Outcome of adding a candidate to one scope's list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    Skip { resolved: String, reason: SkipReason },
    Insert { resolved: String, new_list: String },
}

/// Outcome of removing a candidate from one scope's list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deletion {
    NotFound { target: String },
    Removed {
        target: String,
        removed: usize,
        new_list: String,
    },
}

/// Splits a raw path string into its trimmed, non-empty entries, keeping order.
pub fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(PATH_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Exact, case-insensitive membership of `candidate` in a raw path string.
///
/// Entries match as whole paths; a trailing separator on either side is
/// not significant.
pub fn contains_exact_path(path_list: &str, candidate: &str) -> bool {
    let entries: HashSet<String> = parse_path_list(path_list)
        .iter()
        .map(|entry| path_key(entry))
        .collect();
    entries.contains(&path_key(candidate))
}

/// Computes the list that results from adding `candidate` to `existing`.
///
/// The candidate is resolved first. Both scopes share one namespace for
/// dedup purposes: a path already registered in `opposite` is skipped just
/// like one already in `existing`.
///
/// # Errors
/// Returns `EngineError::InvalidPath` if the candidate cannot be resolved.
pub fn compute_insertion(
    existing: &str,
    opposite: &str,
    candidate: &str,
    cwd: &Path,
) -> Result<Insertion, EngineError> {
    let resolved = resolve_candidate_path(candidate, cwd)?;

    if contains_exact_path(existing, &resolved) {
        return Ok(Insertion::Skip {
            resolved,
            reason: SkipReason::AlreadyInScope,
        });
    }
    if contains_exact_path(opposite, &resolved) {
        return Ok(Insertion::Skip {
            resolved,
            reason: SkipReason::AlreadyInOppositeScope,
        });
    }

    let mut new_list = String::with_capacity(existing.len() + resolved.len() + 1);
    new_list.push_str(existing);
    if !existing.is_empty() && !existing.ends_with(PATH_SEPARATOR) {
        new_list.push(PATH_SEPARATOR);
    }
    new_list.push_str(&resolved);

    Ok(Insertion::Insert { resolved, new_list })
}

/// Computes the list that results from removing `candidate` from `existing`.
///
/// Only `.` is resolved (to `cwd`); other candidates are matched as typed,
/// ignoring case, padding and trailing separators. Every match is removed and
/// the survivors keep their order.
pub fn compute_deletion(existing: &str, candidate: &str, cwd: &Path) -> Deletion {
    let target = if candidate == "." {
        cwd.to_string_lossy().into_owned()
    } else {
        candidate.to_string()
    };
    let key = path_key(&target);

    let entries = parse_path_list(existing);
    let before = entries.len();
    let survivors: Vec<String> = entries
        .into_iter()
        .filter(|entry| path_key(entry) != key)
        .collect();

    let removed = before - survivors.len();
    if removed == 0 {
        return Deletion::NotFound { target };
    }

    Deletion::Removed {
        target,
        removed,
        new_list: survivors.join(&PATH_SEPARATOR.to_string()),
    }
}

/// Entries containing `term`, ignoring case, in their original order.
pub fn filter_by_substring<S: AsRef<str>>(paths: &[S], term: &str) -> Vec<String> {
    let needle = normalize_key(term);
    paths
        .iter()
        .map(|entry| entry.as_ref())
        .filter(|entry: &&str| normalize_key(entry).contains(&needle))
        .map(str::to_string)
        .collect()
}
