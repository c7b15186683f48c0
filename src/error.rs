//! Error types shared by all pathtools binaries
//!
//! Every error maps to exactly one documented exit status, so a caller
//! scripting around these tools can tell failures apart without parsing
//! messages.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Exit statuses shared by every binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    InvalidFlag = 1,
    InvalidArgument = 2,
    MissingFlagArgument = 3,
    TooManyArguments = 4,
    RootNotFound = 5,
    GitUnavailable = 6,
    GitTooOld = 7,
    NotAWorkTree = 8,
    RemoteNotFound = 9,
    BrowserUnavailable = 10,
    Internal = 255,
}

impl ExitStatus {
    /// All statuses in ascending order, used to render the manual pages
    pub const ALL: [Self; 12] = [
        Self::Success,
        Self::InvalidFlag,
        Self::InvalidArgument,
        Self::MissingFlagArgument,
        Self::TooManyArguments,
        Self::RootNotFound,
        Self::GitUnavailable,
        Self::GitTooOld,
        Self::NotAWorkTree,
        Self::RemoteNotFound,
        Self::BrowserUnavailable,
        Self::Internal,
    ];

    /// Numeric process exit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Short description used in manual pages
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidFlag => "invalid flag",
            Self::InvalidArgument => "invalid argument",
            Self::MissingFlagArgument => "missing flag argument",
            Self::TooManyArguments => "too many arguments",
            Self::RootNotFound => "root directory not found",
            Self::GitUnavailable => "git is not available",
            Self::GitTooOld => "git version is too old",
            Self::NotAWorkTree => "path is not inside a git working tree",
            Self::RemoteNotFound => "remote not found",
            Self::BrowserUnavailable => "browser is not available",
            Self::Internal => "internal error",
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}

/// Main error type for the pathtools binaries
#[derive(Error, Debug)]
pub enum ToolError {
    /// An unknown flag was given
    #[error("{message}")]
    InvalidFlag { message: String },

    /// A flag value or positional argument was rejected
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// A flag that takes a value was given without one
    #[error("flag '{flag}' requires an argument")]
    MissingFlagArgument { flag: String },

    /// More positional arguments than the command accepts
    #[error("too many arguments: expected at most {expected}, got {given}")]
    TooManyArguments { expected: usize, given: usize },

    /// No ancestor of the start path contains an indicator
    #[error("root directory not found from {start} (indicators: {indicators})")]
    RootNotFound { start: String, indicators: String },

    /// The git client could not be run
    #[error("git is not available: {message}")]
    GitUnavailable { message: String },

    /// The git client is older than the supported minimum
    #[error("git {found} is too old, at least {required} is required")]
    GitTooOld { found: String, required: String },

    /// The path is not inside a git working tree
    #[error("not inside a git working tree: {}", .path.display())]
    NotAWorkTree { path: PathBuf },

    /// The working tree has no remote with the given name
    #[error("remote '{remote}' not found for {}", .path.display())]
    RemoteNotFound { remote: String, path: PathBuf },

    /// The browser command does not resolve to an executable
    #[error("browser is not available: {browser}")]
    BrowserUnavailable { browser: String },

    /// File system operation errors
    #[error("file system error: {operation} failed on {}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Process execution errors
    #[error("process error: {command} failed")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Writing to standard output failed
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// Programming defects that should never reach a user
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ToolError {
    /// Create a new invalid flag error
    pub fn invalid_flag(message: impl Into<String>) -> Self {
        Self::InvalidFlag {
            message: message.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create a new missing flag argument error
    pub fn missing_flag_argument(flag: impl Into<String>) -> Self {
        Self::MissingFlagArgument { flag: flag.into() }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            source: Some(source),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Exit status reported for this error
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        match self {
            Self::InvalidFlag { .. } => ExitStatus::InvalidFlag,
            Self::InvalidArgument { .. } => ExitStatus::InvalidArgument,
            Self::MissingFlagArgument { .. } => ExitStatus::MissingFlagArgument,
            Self::TooManyArguments { .. } => ExitStatus::TooManyArguments,
            Self::RootNotFound { .. } => ExitStatus::RootNotFound,
            Self::GitUnavailable { .. } => ExitStatus::GitUnavailable,
            Self::GitTooOld { .. } => ExitStatus::GitTooOld,
            Self::NotAWorkTree { .. } => ExitStatus::NotAWorkTree,
            Self::RemoteNotFound { .. } => ExitStatus::RemoteNotFound,
            Self::BrowserUnavailable { .. } => ExitStatus::BrowserUnavailable,
            Self::FileSystem { .. }
            | Self::Process { .. }
            | Self::Output(_)
            | Self::Internal { .. } => ExitStatus::Internal,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_stable() {
        let codes: Vec<u8> = ExitStatus::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 255]);
    }

    #[test]
    fn test_error_exit_status() {
        assert_eq!(
            ToolError::invalid_argument("x", "nope").exit_status(),
            ExitStatus::InvalidArgument
        );
        assert_eq!(
            ToolError::missing_flag_argument("-d").exit_status(),
            ExitStatus::MissingFlagArgument
        );
        assert_eq!(
            ToolError::TooManyArguments {
                expected: 1,
                given: 2
            }
            .exit_status(),
            ExitStatus::TooManyArguments
        );
        assert_eq!(
            ToolError::process("git --version", Some(1), "", "").exit_status(),
            ExitStatus::Internal
        );
    }

    #[test]
    fn test_error_messages_are_single_line() {
        let err = ToolError::RemoteNotFound {
            remote: "upstream".to_string(),
            path: PathBuf::from("/src/repo"),
        };
        assert_eq!(err.to_string(), "remote 'upstream' not found for /src/repo");
        assert!(!err.to_string().contains('\n'));
    }
}
