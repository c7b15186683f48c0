//! Command-line interface module
//!
//! Provides argument parsing, exit status mapping and command execution.

pub mod args;
pub mod commands;
pub mod manual;

pub use args::{OpenArgs, RootArgs, SplitArgs, ToolArgs};
pub use commands::{execute_open, execute_root, execute_split};

use crate::{
    error::{ExitStatus, Result, ToolError},
    setup_logging,
    utils::fs::FileSystemUtils,
};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::ffi::OsString;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use std::process::ExitCode;
use tracing::error;

/// Parse `argv`, set up logging and run `execute` with the working directory
///
/// Every failure is logged once and turned into its documented exit status.
pub fn run_tool<A, I, T, F>(argv: I, execute: F) -> ExitCode
where
    A: ToolArgs,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(&A, &Path) -> Result<ExitStatus>,
{
    let args = match A::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => return report_parse_error(&err),
    };

    if let Err(e) = setup_logging(args.debug()) {
        eprintln!("WARN {e}");
    }

    let outcome = FileSystemUtils::new()
        .current_dir()
        .and_then(|cwd| execute(&args, &cwd));

    match outcome {
        Ok(status) => status.into(),
        Err(err) => report_error(&err),
    }
}

/// Log `err` and return its exit status
///
/// A closed stdout (`split-path | head -1`) ends the program successfully
/// without a message.
pub fn report_error(err: &ToolError) -> ExitCode {
    if matches!(err, ToolError::Output(io_err) if io_err.kind() == IoErrorKind::BrokenPipe) {
        return ExitStatus::Success.into();
    }

    error!("{err}");
    err.exit_status().into()
}

fn report_parse_error(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = err.print();
            ExitStatus::Success.into()
        }
        _ => {
            if let Err(e) = setup_logging(false) {
                eprintln!("WARN {e}");
            }
            report_error(&tool_error_from_clap(err))
        }
    }
}

/// Map a clap parse error onto the shared exit statuses
pub fn tool_error_from_clap(err: &clap::Error) -> ToolError {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => String::new(),
    };

    match err.kind() {
        ErrorKind::UnknownArgument => ToolError::invalid_flag(first_line(err)),
        ErrorKind::InvalidValue => match err.get(ContextKind::InvalidValue) {
            Some(ContextValue::String(value)) if value.is_empty() => {
                ToolError::missing_flag_argument(flag_name(&invalid_arg))
            }
            Some(ContextValue::String(value)) => {
                ToolError::invalid_argument(value.clone(), first_line(err))
            }
            _ => ToolError::missing_flag_argument(flag_name(&invalid_arg)),
        },
        _ => ToolError::invalid_argument(invalid_arg, first_line(err)),
    }
}

/// `-d <DELIMITER>` -> `-d`
fn flag_name(arg: &str) -> String {
    arg.split_whitespace().next().unwrap_or(arg).to_string()
}

/// Clap renders a usage block after the message; keep just the message
fn first_line(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_error(argv: &[&str]) -> ToolError {
        let err = SplitArgs::try_parse_from(argv).unwrap_err();
        tool_error_from_clap(&err)
    }

    #[test]
    fn test_unknown_flag_is_invalid_flag() {
        let err = parse_error(&["split-path", "-x"]);
        assert_eq!(err.exit_status(), ExitStatus::InvalidFlag);
        assert!(err.to_string().contains("-x"));
        assert!(!err.to_string().contains('\n'));
    }

    #[test]
    fn test_missing_value_is_missing_flag_argument() {
        let err = parse_error(&["split-path", "-d"]);
        assert_eq!(err.exit_status(), ExitStatus::MissingFlagArgument);
        assert_eq!(err.to_string(), "flag '-d' requires an argument");
    }

    #[test]
    fn test_flag_name() {
        assert_eq!(flag_name("-d <DELIMITER>"), "-d");
        assert_eq!(flag_name("-p"), "-p");
    }
}
