use std::path::{Component, Path, PathBuf};

use super::error::EngineError;

//─────────────────────────────────────────────────────────────────────────────

/// Resolves a user supplied path to the form stored in a path list.
///
/// `.` is the working directory. Anything else must name an existing file
/// or directory and is made absolute against `cwd`, with `.` and `..`
/// components folded away.
pub fn resolve_candidate_path(raw: &str, cwd: &Path) -> Result<String, EngineError> {
    if raw == "." {
        return Ok(cwd.to_string_lossy().into_owned());
    }

    let candidate = Path::new(raw);
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        cwd.join(candidate)
    };

    if !(absolute.is_dir() || absolute.is_file()) {
        return Err(EngineError::InvalidPath(raw.to_string()));
    }

    Ok(normalize_lexically(&absolute).to_string_lossy().into_owned())
}

/// Makes `.` and `..` components disappear without touching the disk.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never climb above the root or a drive prefix.
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
