// error module
mod error;
// duplicate grouping
mod duplicates;
// membership, insertion and deletion
mod membership;
// candidate resolution
mod resolve;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports of the path set engine.
//─────────────────────────────────────────────────────────────────────────────
pub use duplicates::detect_duplicates;
pub use error::EngineError;
pub use membership::{
    compute_deletion, compute_insertion, contains_exact_path, filter_by_substring, parse_path_list,
    Deletion, Insertion, SkipReason,
};
pub(crate) use resolve::normalize_lexically;

/// Separator between entries of a scope's raw path string.
pub const PATH_SEPARATOR: char = ';';

/// Lower-case projection used for every case-insensitive comparison.
pub(crate) fn normalize_key(entry: &str) -> String {
    entry.to_lowercase()
}

/// Key used when testing whether a list already holds a path.
///
/// On top of the lower-case projection, surrounding whitespace and trailing
/// separators are dropped, so `C:\Tools\` and `c:\tools` compare equal.
/// Roots keep a single separator.
pub(crate) fn path_key(entry: &str) -> String {
    let trimmed = entry.trim();
    let stripped = trimmed.trim_end_matches(&['\\', '/'][..]);
    if trimmed.is_empty() {
        String::new()
    } else if stripped.is_empty() || stripped.ends_with(':') {
        normalize_key(&format!("{}/", stripped))
    } else {
        normalize_key(stripped)
    }
}
