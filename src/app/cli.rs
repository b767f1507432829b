use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::store::Scope;

#[derive(Parser, Debug)]
#[clap(author, version, about = "A simple tool to manage the PATH environment variable", long_about = None)]
pub struct Cli {
    /// JSON file holding the user and system PATH instead of the OS store
    #[clap(long, env = "PATHTOOL_STORE", global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Append verbose diagnostics to this file
    #[clap(long, env = "PATHTOOL_LOG", global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Suppress verbose logging even when a log file is configured.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all paths in the user or system PATH environment variable
    List {
        #[clap(flatten)]
        scopes: ScopeFlags,

        /// Prefix every entry with the scope it came from
        #[clap(long)]
        include_target: bool,

        /// Color entries by scope
        #[clap(long)]
        color_output: bool,
    },

    /// Add a path to the user or system PATH environment variable
    Add {
        /// The path to add to the PATH environment variable
        path: String,

        #[clap(flatten)]
        scopes: ScopeFlags,
    },

    /// Delete a path from the user or system PATH environment variable
    Delete {
        /// The path to remove from the PATH environment variable
        path: String,

        #[clap(flatten)]
        scopes: ScopeFlags,
    },

    /// Save the current PATH environment variable to a file
    Save {
        /// The file to save the PATH environment variable to
        file: Option<String>,

        #[clap(flatten)]
        scopes: ScopeFlags,
    },

    /// Check for duplicated paths
    Checkdup {
        #[clap(flatten)]
        scopes: ScopeFlags,
    },

    /// Find paths containing a certain string
    Find {
        /// The string to search for in paths
        #[clap(value_name = "searchString")]
        search_string: String,

        #[clap(flatten)]
        scopes: ScopeFlags,
    },

    /// Ensure git is in PATH and add its Unix tools directory if not present
    Gitunix,
}

/// The `--user` / `--system` pair shared by most commands.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeFlags {
    /// Works on the user profile path
    #[clap(long)]
    pub user: bool,

    /// Works on the system PATH environment variable
    #[clap(long)]
    pub system: bool,
}

impl ScopeFlags {
    /// Selected scopes, or both when neither flag is given.
    pub fn or_both(self) -> Vec<Scope> {
        if !self.user && !self.system {
            return vec![Scope::User, Scope::System];
        }
        self.selected()
    }

    /// Selected scopes, or just the user scope when neither flag is given.
    pub fn or_user(self) -> Vec<Scope> {
        if !self.user && !self.system {
            return vec![Scope::User];
        }
        self.selected()
    }

    /// Exactly the scopes named on the command line.
    pub fn selected(self) -> Vec<Scope> {
        let mut scopes = Vec::with_capacity(2);
        if self.user {
            scopes.push(Scope::User);
        }
        if self.system {
            scopes.push(Scope::System);
        }
        scopes
    }
}

/// Prints the banner shown when the tool is run without arguments.
pub fn print_usage_banner() {
    println!("{}", usage_banner());
}

pub(crate) fn usage_banner() -> String {
    [
        "Copyright 2024, Hermit AS".to_string(),
        format!("PathManager v{}", env!("CARGO_PKG_VERSION")),
        "-------------".to_string(),
        "Usage:".to_string(),
        "  list [--user] [--system] [--include-target] [--color-output]  List all paths".to_string(),
        "  add <path> [--user] [--system]                                Add a new path".to_string(),
        "  delete <path> [--user] [--system]                             Delete a path".to_string(),
        "  save <filename> [--user] [--system]                           Save the paths to a file".to_string(),
        "  checkdup [--user] [--system]                                  Check for duplicated paths".to_string(),
        "  find <searchString> [--user] [--system]                       Find paths containing a string".to_string(),
        "  gitunix                                                       Ensure git is in PATH and add Unix tools path if not present".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from(["pathtool", "list", "--system", "--include-target"]).unwrap();
        match cli.command {
            Command::List {
                scopes,
                include_target,
                color_output,
            } => {
                assert_eq!(scopes.selected(), vec![Scope::System]);
                assert!(include_target);
                assert!(!color_output);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_find_with_search_string() {
        let cli = Cli::try_parse_from(["pathtool", "find", "git", "--user"]).unwrap();
        match cli.command {
            Command::Find {
                search_string,
                scopes,
            } => {
                assert_eq!(search_string, "git");
                assert_eq!(scopes.selected(), vec![Scope::User]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(Cli::try_parse_from(["pathtool", "frobnicate"]).is_err());
        assert!(Cli::try_parse_from(["pathtool", "gitunix", "--user"]).is_err());
    }

    #[test]
    fn scope_defaults_differ_per_convention() {
        let none = ScopeFlags::default();
        assert_eq!(none.or_both(), vec![Scope::User, Scope::System]);
        assert_eq!(none.or_user(), vec![Scope::User]);
        assert!(none.selected().is_empty());

        let system = ScopeFlags {
            user: false,
            system: true,
        };
        assert_eq!(system.or_both(), vec![Scope::System]);
        assert_eq!(system.or_user(), vec![Scope::System]);
    }

    #[test]
    fn banner_lists_every_command() {
        let banner = usage_banner();
        for command in ["list", "add", "delete", "save", "checkdup", "find", "gitunix"] {
            assert!(banner.contains(&format!("  {command}")), "missing {command}");
        }
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
    }
}
