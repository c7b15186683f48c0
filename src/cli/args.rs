//! Command-line argument definitions for each binary
//!
//! Positional arguments are collected without an upper bound so that the
//! commands, not clap, report surplus arguments with their own exit status.

use crate::cli::manual;
use crate::core::remote::BROWSER_ENV;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Flags shared by all binaries
pub trait ToolArgs: Parser {
    /// Whether diagnostic logging was requested
    fn debug(&self) -> bool;
}

/// Print a path and each of its parent directories
#[derive(Parser, Debug)]
#[command(name = "split-path", version, about, long_about = None)]
#[command(disable_help_flag = true, after_long_help = manual::split_path_manual())]
pub struct SplitArgs {
    /// Print this manual
    #[arg(short = 'h', long = "help", action = ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Only require PATH to be absolute, not enterable
    #[arg(short = 'l')]
    pub lenient: bool,

    /// Print from the root down instead of from PATH up
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Text written after each segment
    #[arg(short = 'd', value_name = "DELIMITER", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Enable diagnostic output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Path to split (default: working directory)
    #[arg(value_name = "PATH", trailing_var_arg = true)]
    pub paths: Vec<String>,
}

impl ToolArgs for SplitArgs {
    fn debug(&self) -> bool {
        self.debug
    }
}

/// Find the nearest enclosing project root
#[derive(Parser, Debug)]
#[command(name = "find-root", version, about, long_about = None)]
#[command(disable_help_flag = true, after_long_help = manual::find_root_manual())]
pub struct RootArgs {
    /// Print this manual
    #[arg(short = 'h', long = "help", action = ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Accept a non-enterable absolute start path and exit 0 when no root is found
    #[arg(short = 'l')]
    pub lenient: bool,

    /// Do not report a missing root
    #[arg(short = 'q')]
    pub quiet: bool,

    /// Directory to start searching from (default: working directory)
    #[arg(short = 'p', value_name = "PATH")]
    pub path: Option<String>,

    /// Enable diagnostic output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Names marking a root directory (default: .git)
    #[arg(value_name = "INDICATOR", trailing_var_arg = true)]
    pub indicators: Vec<String>,
}

impl ToolArgs for RootArgs {
    fn debug(&self) -> bool {
        self.debug
    }
}

/// Open the git remotes of working trees in a browser
#[derive(Parser, Debug)]
#[command(name = "open-remote", version, about, long_about = None)]
#[command(disable_help_flag = true, after_long_help = manual::open_remote_manual())]
pub struct OpenArgs {
    /// Print this manual
    #[arg(short = 'h', long = "help", action = ArgAction::HelpLong)]
    pub help: Option<bool>,

    /// Browser command to launch
    #[arg(short = 'b', value_name = "BROWSER", env = BROWSER_ENV, hide_env_values = true)]
    pub browser: Option<String>,

    /// Remote whose URL is opened
    #[arg(short = 'r', value_name = "REMOTE", default_value = crate::core::remote::DEFAULT_REMOTE)]
    pub remote: String,

    /// Enable diagnostic output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Paths inside git working trees (default: working directory)
    #[arg(value_name = "PATH", trailing_var_arg = true)]
    pub paths: Vec<PathBuf>,
}

impl ToolArgs for OpenArgs {
    fn debug(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_split_flags() {
        let args = SplitArgs::try_parse_from(["split-path", "-lr", "-d,", "/tmp"]).unwrap();
        assert!(args.lenient);
        assert!(args.reverse);
        assert_eq!(args.delimiter.as_deref(), Some(","));
        assert_eq!(args.paths, vec!["/tmp".to_string()]);
        assert!(!args.debug());
    }

    #[test]
    fn test_split_delimiter_may_start_with_dash() {
        let args = SplitArgs::try_parse_from(["split-path", "-d", "-r", "/tmp"]).unwrap();
        assert_eq!(args.delimiter.as_deref(), Some("-r"));
        assert!(!args.reverse);
    }

    #[test]
    fn test_split_collects_surplus_paths() {
        let args = SplitArgs::try_parse_from(["split-path", "/a", "/b"]).unwrap();
        assert_eq!(args.paths.len(), 2);
    }

    #[test]
    fn test_flags_after_first_operand_are_operands() {
        let args = SplitArgs::try_parse_from(["split-path", "/a", "-r"]).unwrap();
        assert!(!args.reverse);
        assert_eq!(args.paths, vec!["/a".to_string(), "-r".to_string()]);

        let args = RootArgs::try_parse_from(["find-root", "-l", ".git", "-q"]).unwrap();
        assert!(args.lenient);
        assert!(!args.quiet);
        assert_eq!(args.indicators, vec![".git", "-q"]);
    }

    #[test]
    fn test_help_is_reported_as_display() {
        let err = SplitArgs::try_parse_from(["split-path", "-h", "/a", "/b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_parse_root_args() {
        let args = RootArgs::try_parse_from(["find-root", "-q", "-p", "/src", "Cargo.toml", ".hg"])
            .unwrap();
        assert!(args.quiet);
        assert!(!args.lenient);
        assert_eq!(args.path.as_deref(), Some("/src"));
        assert_eq!(args.indicators, vec!["Cargo.toml", ".hg"]);
    }

    #[test]
    fn test_parse_open_defaults() {
        let args = OpenArgs::try_parse_from(["open-remote", "-b", "firefox"]).unwrap();
        assert_eq!(args.remote, "origin");
        assert_eq!(args.browser.as_deref(), Some("firefox"));
        assert!(args.paths.is_empty());
    }

    #[test]
    fn test_unknown_flag() {
        let err = RootArgs::try_parse_from(["find-root", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
