//! File system helpers for the `save` command.
//!
//! Snapshot files are named after the requested file with the scope spliced
//! in before the extension, and hold a pretty-printed JSON array of entries.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::{Path, PathBuf};

use super::error::AppError;
use super::verbose_println;
use crate::store::Scope;

/// Extension used when the requested file has none.
const DEFAULT_SNAPSHOT_EXTENSION: &str = "json";

/// Derives the per-scope snapshot file name.
///
/// `out.json` becomes `out.user.json`; a name without an extension gets
/// `.json`, so `snap` becomes `snap.user.json`. The directory is kept.
///
/// # Errors
/// Returns `AppError::InvalidFileName` when `file` names a directory
/// (`dir/`, `.`, `..`) rather than a file.
pub fn snapshot_file_name(file: &str, scope: Scope) -> Result<PathBuf, AppError> {
    let last_segment = file.rsplit(&['/', '\\'][..]).next().unwrap_or(file);
    if matches!(last_segment, "" | "." | "..") {
        return Err(AppError::InvalidFileName(file.to_string()));
    }

    let name = Path::new(last_segment);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| last_segment.to_string());
    let extension = name
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_SNAPSHOT_EXTENSION.to_string());

    let file_name = format!("{}.{}.{}", stem, scope.name(), extension);
    Ok(match Path::new(file).parent() {
        Some(directory) => directory.join(file_name),
        None => PathBuf::from(file_name),
    })
}

/// Writes `entries` for `scope` as a JSON array next to `file`.
///
/// # Errors
/// Returns `AppError::InvalidFileName` for a directory-like name,
/// `AppError::Json` if serialization fails or `AppError::Io` if the file
/// cannot be written.
pub fn write_snapshot(
    entries: &[String],
    file: &str,
    scope: Scope,
    quiet_mode: bool,
) -> Result<PathBuf, AppError> {
    let target = snapshot_file_name(file, scope)?;
    let json = serde_json::to_string_pretty(entries)?;
    write_content_to_file(&target, &json)?;
    verbose_println!(
        quiet_mode,
        "[save] wrote {} {} entries to {}",
        entries.len(),
        scope,
        target.display()
    );
    Ok(target)
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// # Errors
/// Returns an `IoError` if any file operation (opening, writing, flushing) fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}
