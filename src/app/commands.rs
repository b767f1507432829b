//! Command handlers.
//!
//! Each handler reads the scopes it needs from the injected store once, runs
//! the path set engine over them and, for mutating commands, writes back once.
//! Console output goes to the writer passed in so handlers can be exercised
//! against an in-memory store and buffer.

use colored::Colorize;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::cli::{Command, ScopeFlags};
use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println};
use crate::engine::{self, Deletion, Insertion, SkipReason};
use crate::store::{PathStore, Scope};

/// Name of the git executable searched for by `gitunix`.
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";

pub struct CommandRunner<'a> {
    store: &'a mut dyn PathStore,
    cwd: &'a Path,
    quiet_mode: bool,
}

impl<'a> CommandRunner<'a> {
    pub fn new(store: &'a mut dyn PathStore, cwd: &'a Path, quiet_mode: bool) -> Self {
        Self {
            store,
            cwd,
            quiet_mode,
        }
    }

    /// Runs one parsed command. `process_path` is the process `PATH`, used
    /// only by `gitunix`.
    pub fn dispatch<W: Write>(
        &mut self,
        command: &Command,
        process_path: Option<&OsStr>,
        out: &mut W,
    ) -> Result<(), AppError> {
        match command {
            Command::List {
                scopes,
                include_target,
                color_output,
            } => self.list(*scopes, *include_target, *color_output, out),
            Command::Add { path, scopes } => self.add(path, *scopes, out),
            Command::Delete { path, scopes } => self.delete(path, *scopes, out),
            Command::Save { file, scopes } => self.save(file.as_deref(), *scopes, out),
            Command::Checkdup { scopes } => self.check_duplicates(*scopes, out),
            Command::Find {
                search_string,
                scopes,
            } => self.find(search_string, *scopes, out),
            Command::Gitunix => self.git_unix(process_path, out),
        }
    }

    pub fn list<W: Write>(
        &self,
        scopes: ScopeFlags,
        include_target: bool,
        color_output: bool,
        out: &mut W,
    ) -> Result<(), AppError> {
        let mut entries: Vec<(Scope, String)> = Vec::new();
        for scope in scopes.or_both() {
            entries.extend(
                self.store
                    .get_all_paths(scope)?
                    .into_iter()
                    .map(|entry| (scope, entry)),
            );
        }
        verbose_println!(self.quiet_mode, "[list] {} entries", entries.len());

        if entries.is_empty() {
            writeln!(out, "No PATHs found")?;
            return Ok(());
        }

        entries.sort_by_cached_key(|(_, entry)| entry.to_lowercase());
        for (scope, entry) in entries {
            let text = if color_output {
                match scope {
                    Scope::User => entry.green().to_string(),
                    Scope::System => entry.cyan().to_string(),
                }
            } else {
                entry
            };
            if include_target {
                writeln!(out, "[{}] {}", scope, text)?;
            } else {
                writeln!(out, "{}", text)?;
            }
        }
        Ok(())
    }

    /// Adds `path` to each selected scope, the user scope by default.
    ///
    /// Scopes are handled in order, so with both flags the system insertion
    /// sees the freshly updated user list and is skipped.
    pub fn add<W: Write>(
        &mut self,
        path: &str,
        scopes: ScopeFlags,
        out: &mut W,
    ) -> Result<(), AppError> {
        for scope in scopes.or_user() {
            let existing = self.store.get_path(scope)?;
            let opposite = self.store.get_path(scope.opposite())?;

            let outcome = engine::compute_insertion(&existing, &opposite, path, self.cwd)
                .inspect_err(|e| verbose_eprintln!(self.quiet_mode, "[add] {}", e))?;

            match outcome {
                Insertion::Skip { resolved, reason } => {
                    let holder = match reason {
                        SkipReason::AlreadyInScope => scope,
                        SkipReason::AlreadyInOppositeScope => scope.opposite(),
                    };
                    writeln!(out, "Path {} already exists in {} PATH", resolved, holder)?;
                }
                Insertion::Insert { resolved, new_list } => {
                    writeln!(out, "Adding {} to PATH.", resolved)?;
                    self.store.set_path(scope, &new_list)?;
                    verbose_println!(self.quiet_mode, "[add] {} PATH is now {}", scope, new_list);
                    writeln!(out, "Path {} added to {} PATH", path, scope)?;
                }
            }
        }
        Ok(())
    }

    /// Removes `path` from each selected scope, the user scope by default.
    ///
    /// Every scope is checked before anything is written: if the path is
    /// missing from any selected scope nothing changes.
    pub fn delete<W: Write>(
        &mut self,
        path: &str,
        scopes: ScopeFlags,
        out: &mut W,
    ) -> Result<(), AppError> {
        let mut removals = Vec::new();
        for scope in scopes.or_user() {
            let existing = self.store.get_path(scope)?;
            match engine::compute_deletion(&existing, path, self.cwd) {
                Deletion::NotFound { target } => {
                    return Err(AppError::PathNotFound {
                        path: target,
                        scope,
                    });
                }
                Deletion::Removed {
                    target,
                    removed,
                    new_list,
                } => removals.push((scope, target, removed, new_list)),
            }
        }

        for (scope, target, removed, new_list) in removals {
            self.store.set_path(scope, &new_list)?;
            verbose_println!(
                self.quiet_mode,
                "[delete] removed {} occurrence(s) of {} from {} PATH",
                removed,
                target,
                scope
            );
            writeln!(out, "Path {} removed from {} PATH", target, scope)?;
        }
        Ok(())
    }

    /// Writes one snapshot file per selected scope.
    ///
    /// Unlike the other commands `save` has no default scope.
    pub fn save<W: Write>(
        &self,
        file: Option<&str>,
        scopes: ScopeFlags,
        out: &mut W,
    ) -> Result<(), AppError> {
        let file = match file {
            Some(file) if !file.is_empty() => file,
            _ => return Err(AppError::MissingArgument("file".to_string())),
        };
        let selected = scopes.selected();
        if selected.is_empty() {
            return Err(AppError::InvalidFlagCombination(
                "You must specify either --user or --system".to_string(),
            ));
        }

        for scope in selected {
            let entries = self.store.get_all_paths(scope)?;
            let written = file_handler::write_snapshot(&entries, file, scope, self.quiet_mode)?;
            writeln!(out, "{} Paths saved to {}", scope, written.display())?;
        }
        Ok(())
    }

    pub fn check_duplicates<W: Write>(&self, scopes: ScopeFlags, out: &mut W) -> Result<(), AppError> {
        let selected = scopes.or_both();
        let read = |scope: Scope| -> Result<Vec<String>, AppError> {
            if selected.contains(&scope) {
                Ok(self.store.get_all_paths(scope)?)
            } else {
                Ok(Vec::new())
            }
        };
        let user_paths = read(Scope::User)?;
        let system_paths = read(Scope::System)?;

        let report = engine::detect_duplicates(&user_paths, &system_paths);
        verbose_println!(
            self.quiet_mode,
            "[checkdup] {} combined, {} user, {} system",
            report.combined.len(),
            report.user.len(),
            report.system.len()
        );

        if !report.has_duplicates() {
            writeln!(out, "No duplicates found.")?;
            return Ok(());
        }

        writeln!(out, "Duplicate Paths:")?;
        for record in &report.combined {
            writeln!(out, "{} ({} occurrences across user and system)", record.key, record.count)?;
        }
        for record in &report.user {
            writeln!(out, "{} ({} occurrences in user)", record.key, record.count)?;
        }
        for record in &report.system {
            writeln!(out, "{} ({} occurrences in system)", record.key, record.count)?;
        }
        Ok(())
    }

    pub fn find<W: Write>(
        &self,
        search_string: &str,
        scopes: ScopeFlags,
        out: &mut W,
    ) -> Result<(), AppError> {
        let mut any_found = false;
        for scope in scopes.or_both() {
            let matches = engine::filter_by_substring(&self.store.get_all_paths(scope)?, search_string);
            if matches.is_empty() {
                continue;
            }
            any_found = true;
            let heading = match scope {
                Scope::User => "User",
                Scope::System => "System",
            };
            writeln!(out, "{} Paths containing the search string:", heading)?;
            for entry in matches {
                writeln!(out, "{}", entry)?;
            }
        }

        if !any_found {
            writeln!(out, "No paths containing the search string found.")?;
        }
        Ok(())
    }

    /// Finds git on the process `PATH` and makes sure the `usr/bin`
    /// directory of that installation is on the user PATH.
    pub fn git_unix<W: Write>(
        &mut self,
        process_path: Option<&OsStr>,
        out: &mut W,
    ) -> Result<(), AppError> {
        let git = process_path
            .and_then(|paths| locate_executable(paths, GIT_EXECUTABLE, self.cwd))
            .ok_or_else(|| AppError::ExecutableNotFound(GIT_EXECUTABLE.to_string()))?;
        writeln!(out, "Found {} at {}", GIT_EXECUTABLE, git.display())?;

        let tools_dir = unix_tools_dir(&git);
        let tools = tools_dir.to_string_lossy().into_owned();
        verbose_println!(self.quiet_mode, "[gitunix] unix tools directory {}", tools);

        let user = self.store.get_path(Scope::User)?;
        let system = self.store.get_path(Scope::System)?;
        if engine::contains_exact_path(&user, &tools) || engine::contains_exact_path(&system, &tools)
        {
            writeln!(out, "Unix tools path {} is already in PATH", tools)?;
            return Ok(());
        }

        match engine::compute_insertion(&user, &system, &tools, self.cwd)? {
            Insertion::Skip { resolved, .. } => {
                writeln!(out, "Unix tools path {} is already in PATH", resolved)?;
            }
            Insertion::Insert { resolved, new_list } => {
                self.store.set_path(Scope::User, &new_list)?;
                writeln!(out, "Path {} added to user PATH", resolved)?;
            }
        }
        Ok(())
    }
}

/// First file named `name` in the directories of a platform `PATH` value.
///
/// Relative directories are taken from `cwd`, so the result is absolute.
pub fn locate_executable(process_path: &OsStr, name: &str, cwd: &Path) -> Option<PathBuf> {
    std::env::split_paths(process_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| engine::normalize_lexically(&cwd.join(dir).join(name)))
        .find(|candidate| candidate.is_file())
}

// git lives in `<root>/cmd` or `<root>/bin`; the Unix tools in `<root>/usr/bin`.
fn unix_tools_dir(git: &Path) -> PathBuf {
    let bin_dir = git.parent().unwrap_or(git);
    let root = bin_dir.parent().unwrap_or(bin_dir);
    root.join("usr").join("bin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::fs;

    const BOTH: ScopeFlags = ScopeFlags {
        user: true,
        system: true,
    };
    const USER: ScopeFlags = ScopeFlags {
        user: true,
        system: false,
    };
    const SYSTEM: ScopeFlags = ScopeFlags {
        user: false,
        system: true,
    };
    const NEITHER: ScopeFlags = ScopeFlags {
        user: false,
        system: false,
    };

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn list_sorts_both_scopes_by_default() {
        let mut store = MemoryStore::with_paths("C:\\b;C:\\D", "C:\\a;C:\\C");
        let cwd = Path::new("/");
        let runner = CommandRunner::new(&mut store, cwd, true);

        let mut out = Vec::new();
        runner.list(NEITHER, false, false, &mut out).unwrap();

        assert_eq!(output(out), "C:\\a\nC:\\b\nC:\\C\nC:\\D\n");
    }

    #[test]
    fn list_can_show_the_target_scope() {
        let mut store = MemoryStore::with_paths("C:\\U", "C:\\S");
        let cwd = Path::new("/");
        let runner = CommandRunner::new(&mut store, cwd, true);

        let mut out = Vec::new();
        runner.list(SYSTEM, true, false, &mut out).unwrap();
        assert_eq!(output(out), "[system] C:\\S\n");

        let mut out = Vec::new();
        runner.list(BOTH, true, false, &mut out).unwrap();
        assert_eq!(output(out), "[system] C:\\S\n[user] C:\\U\n");
    }

    #[test]
    fn list_colours_entries_by_scope_but_not_the_prefix() {
        let mut store = MemoryStore::with_paths("C:\\U", "C:\\S");
        let runner = CommandRunner::new(&mut store, Path::new("/"), true);

        colored::control::set_override(true);
        let mut out = Vec::new();
        let listed = runner.list(BOTH, true, true, &mut out);
        colored::control::unset_override();
        listed.unwrap();

        let printed = output(out);
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[system] \u{1b}[36mC:\\S"), "{:?}", lines[0]);
        assert!(lines[1].starts_with("[user] \u{1b}[32mC:\\U"), "{:?}", lines[1]);
        assert!(lines.iter().all(|line| line.ends_with("\u{1b}[0m")));
    }

    #[test]
    fn list_reports_an_empty_store() {
        let mut store = MemoryStore::new();
        let cwd = Path::new("/");
        let runner = CommandRunner::new(&mut store, cwd, true);

        let mut out = Vec::new();
        runner.list(NEITHER, false, false, &mut out).unwrap();
        assert_eq!(output(out), "No PATHs found\n");
    }

    #[test]
    fn add_defaults_to_the_user_scope() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = dir.path().to_string_lossy().into_owned();
        let mut store = MemoryStore::with_paths("C:\\A", "C:\\S");

        let mut out = Vec::new();
        CommandRunner::new(&mut store, dir.path(), true)
            .add(".", NEITHER, &mut out)
            .unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), format!("C:\\A;{resolved}"));
        assert_eq!(store.get_path(Scope::System).unwrap(), "C:\\S");
        assert!(output(out).contains("added to user PATH"));
    }

    #[test]
    fn add_to_both_scopes_registers_the_path_once() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = dir.path().to_string_lossy().into_owned();
        let mut store = MemoryStore::new();

        let mut out = Vec::new();
        CommandRunner::new(&mut store, dir.path(), true)
            .add(".", BOTH, &mut out)
            .unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), resolved);
        assert_eq!(store.get_path(Scope::System).unwrap(), "");
        assert!(output(out).contains(&format!("Path {resolved} already exists in user PATH")));
    }

    #[test]
    fn add_skips_a_path_held_by_the_other_scope() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = dir.path().to_string_lossy().into_owned();
        let mut store = MemoryStore::with_paths("", &resolved);

        let mut out = Vec::new();
        CommandRunner::new(&mut store, dir.path(), true)
            .add(".", USER, &mut out)
            .unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), "");
        assert_eq!(
            output(out),
            format!("Path {resolved} already exists in system PATH\n")
        );
    }

    #[test]
    fn add_of_an_invalid_path_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemoryStore::with_paths("C:\\A", "C:\\S");

        let mut out = Vec::new();
        let err = CommandRunner::new(&mut store, dir.path(), true)
            .add("no-such-dir", BOTH, &mut out)
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidPath(ref p) if p == "no-such-dir"));
        assert_eq!(store.get_path(Scope::User).unwrap(), "C:\\A");
        assert_eq!(store.get_path(Scope::System).unwrap(), "C:\\S");
    }

    #[test]
    fn delete_keeps_the_order_of_survivors() {
        let mut store = MemoryStore::with_paths("C:\\Z;C:\\A;C:\\M;c:\\a", "C:\\A");
        let cwd = Path::new("/");

        let mut out = Vec::new();
        CommandRunner::new(&mut store, cwd, true)
            .delete("C:\\A", NEITHER, &mut out)
            .unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), "C:\\Z;C:\\M");
        assert_eq!(store.get_path(Scope::System).unwrap(), "C:\\A");
        assert_eq!(output(out), "Path C:\\A removed from user PATH\n");
    }

    #[test]
    fn delete_matches_a_padded_entry() {
        let mut store = MemoryStore::with_paths("C:\\A ;C:\\B", "");

        let mut out = Vec::new();
        CommandRunner::new(&mut store, Path::new("/"), true)
            .delete("C:\\A", NEITHER, &mut out)
            .unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), "C:\\B");
    }

    #[test]
    fn delete_is_all_or_nothing_across_scopes() {
        let mut store = MemoryStore::with_paths("C:\\A;C:\\B", "C:\\S");
        let cwd = Path::new("/");

        let mut out = Vec::new();
        let err = CommandRunner::new(&mut store, cwd, true)
            .delete("c:\\a", BOTH, &mut out)
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::PathNotFound {
                scope: Scope::System,
                ..
            }
        ));
        assert_eq!(store.get_path(Scope::User).unwrap(), "C:\\A;C:\\B");
        assert!(out.is_empty());
    }

    #[test]
    fn save_without_scope_flags_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let requested = dir.path().join("out.json");
        let mut store = MemoryStore::with_paths("C:\\A", "C:\\S");
        let runner = CommandRunner::new(&mut store, dir.path(), true);

        let mut out = Vec::new();
        let err = runner
            .save(Some(&requested.to_string_lossy()), NEITHER, &mut out)
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidFlagCombination(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn save_without_a_file_name_is_rejected() {
        let mut store = MemoryStore::new();
        let runner = CommandRunner::new(&mut store, Path::new("/"), true);

        let mut out = Vec::new();
        assert!(matches!(
            runner.save(None, USER, &mut out),
            Err(AppError::MissingArgument(_))
        ));
        assert!(matches!(
            runner.save(Some(""), USER, &mut out),
            Err(AppError::MissingArgument(_))
        ));
    }

    #[test]
    fn save_writes_one_file_per_scope() {
        let dir = tempfile::tempdir().unwrap();
        let requested = dir.path().join("out.json");
        let mut store = MemoryStore::with_paths("C:\\A;C:\\A", "C:\\S");
        let runner = CommandRunner::new(&mut store, dir.path(), true);

        let mut out = Vec::new();
        runner
            .save(Some(&requested.to_string_lossy()), BOTH, &mut out)
            .unwrap();

        let user: Vec<String> =
            serde_json::from_str(&fs::read_to_string(dir.path().join("out.user.json")).unwrap()).unwrap();
        let system: Vec<String> =
            serde_json::from_str(&fs::read_to_string(dir.path().join("out.system.json")).unwrap())
                .unwrap();
        assert_eq!(user, vec!["C:\\A", "C:\\A"]);
        assert_eq!(system, vec!["C:\\S"]);
        assert!(output(out).starts_with("user Paths saved to "));
    }

    #[test]
    fn save_rejects_a_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MemoryStore::with_paths("C:\\A", "C:\\S");
        let runner = CommandRunner::new(&mut store, dir.path(), true);

        let mut out = Vec::new();
        for name in [format!("{}/", dir.path().display()), ".".to_string()] {
            let err = runner.save(Some(&name), BOTH, &mut out).unwrap_err();
            assert!(matches!(err, AppError::InvalidFileName(_)));
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn checkdup_reports_cross_scope_pairs() {
        let mut store = MemoryStore::with_paths("C:\\A;C:\\B", "c:\\a;C:\\C");
        let runner = CommandRunner::new(&mut store, Path::new("/"), true);

        let mut out = Vec::new();
        runner.check_duplicates(NEITHER, &mut out).unwrap();

        assert_eq!(
            output(out),
            "Duplicate Paths:\nc:\\a (2 occurrences across user and system)\n"
        );
    }

    #[test]
    fn checkdup_for_one_scope_ignores_the_other() {
        let mut store = MemoryStore::with_paths("C:\\A;C:\\B", "c:\\a;C:\\C");
        let runner = CommandRunner::new(&mut store, Path::new("/"), true);

        let mut out = Vec::new();
        runner.check_duplicates(USER, &mut out).unwrap();
        assert_eq!(output(out), "No duplicates found.\n");
    }

    #[test]
    fn find_groups_matches_by_scope() {
        let mut store = MemoryStore::with_paths(
            "C:\\Program Files;C:\\Windows",
            "C:\\WINDOWS\\System32;C:\\Tools",
        );
        let runner = CommandRunner::new(&mut store, Path::new("/"), true);

        let mut out = Vec::new();
        runner.find("windows", NEITHER, &mut out).unwrap();
        assert_eq!(
            output(out),
            "User Paths containing the search string:\nC:\\Windows\n\
             System Paths containing the search string:\nC:\\WINDOWS\\System32\n"
        );

        let mut out = Vec::new();
        runner.find("python", USER, &mut out).unwrap();
        assert_eq!(output(out), "No paths containing the search string found.\n");
    }

    fn fake_git_install() -> (tempfile::TempDir, PathBuf, std::ffi::OsString) {
        let root = tempfile::tempdir().unwrap();
        let cmd = root.path().join("cmd");
        let tools = root.path().join("usr").join("bin");
        fs::create_dir_all(&cmd).unwrap();
        fs::create_dir_all(&tools).unwrap();
        fs::write(cmd.join(GIT_EXECUTABLE), b"").unwrap();

        let elsewhere = root.path().join("elsewhere");
        fs::create_dir_all(&elsewhere).unwrap();
        let process_path = std::env::join_paths([elsewhere, cmd]).unwrap();
        (root, tools, process_path)
    }

    #[test]
    fn gitunix_appends_the_tools_directory_once() {
        let (root, tools, process_path) = fake_git_install();
        let tools = tools.to_string_lossy().into_owned();
        let mut store = MemoryStore::with_paths("C:\\A", "");

        let mut out = Vec::new();
        let mut runner = CommandRunner::new(&mut store, root.path(), true);
        runner.git_unix(Some(&process_path), &mut out).unwrap();
        runner.git_unix(Some(&process_path), &mut out).unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), format!("C:\\A;{tools}"));
        let printed = output(out);
        assert!(printed.contains(&format!("Path {tools} added to user PATH")));
        assert!(printed.contains(&format!("Unix tools path {tools} is already in PATH")));
    }

    #[test]
    fn gitunix_leaves_a_system_registration_alone() {
        let (root, tools, process_path) = fake_git_install();
        let tools = tools.to_string_lossy().into_owned();
        let mut store = MemoryStore::with_paths("", &tools);

        let mut out = Vec::new();
        CommandRunner::new(&mut store, root.path(), true)
            .git_unix(Some(&process_path), &mut out)
            .unwrap();

        assert_eq!(store.get_path(Scope::User).unwrap(), "");
    }

    #[test]
    fn gitunix_resolves_a_relative_path_entry() {
        let root = tempfile::tempdir().unwrap();
        let install = root.path().join("inst");
        fs::create_dir_all(install.join("cmd")).unwrap();
        fs::create_dir_all(install.join("usr").join("bin")).unwrap();
        fs::write(install.join("cmd").join(GIT_EXECUTABLE), b"").unwrap();
        let process_path = std::env::join_paths([Path::new("inst").join("cmd")]).unwrap();
        let mut store = MemoryStore::new();

        let mut out = Vec::new();
        CommandRunner::new(&mut store, root.path(), true)
            .git_unix(Some(&process_path), &mut out)
            .unwrap();

        let tools = install.join("usr").join("bin");
        assert_eq!(store.get_path(Scope::User).unwrap(), tools.to_string_lossy());
    }

    #[test]
    fn locate_executable_returns_an_absolute_path() {
        let (root, _, _) = fake_git_install();
        let process_path = std::env::join_paths([Path::new("./elsewhere/../cmd")]).unwrap();

        let git = locate_executable(&process_path, GIT_EXECUTABLE, root.path()).unwrap();

        assert!(git.is_absolute());
        assert_eq!(git, root.path().join("cmd").join(GIT_EXECUTABLE));
    }

    #[test]
    fn gitunix_without_git_fails() {
        let dir = tempfile::tempdir().unwrap();
        let process_path = std::env::join_paths([dir.path()]).unwrap();
        let mut store = MemoryStore::new();

        let mut out = Vec::new();
        let err = CommandRunner::new(&mut store, dir.path(), true)
            .git_unix(Some(&process_path), &mut out)
            .unwrap_err();

        assert!(matches!(err, AppError::ExecutableNotFound(_)));
        assert_eq!(store.get_path(Scope::User).unwrap(), "");
    }
}
