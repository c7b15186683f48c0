//! Manual page sections appended to `-h` output

use crate::error::ExitStatus;
use std::fmt::Write;

/// Statuses every binary can report
pub const COMMON_STATUSES: [ExitStatus; 5] = [
    ExitStatus::Success,
    ExitStatus::InvalidFlag,
    ExitStatus::InvalidArgument,
    ExitStatus::MissingFlagArgument,
    ExitStatus::Internal,
];

/// Render the EXIT STATUS section for a binary
///
/// `specific` lists the statuses only that binary reports; the shared ones
/// are always included. Output is sorted by code.
pub fn exit_status_section(specific: &[ExitStatus]) -> String {
    let mut statuses: Vec<ExitStatus> = COMMON_STATUSES.iter().chain(specific).copied().collect();
    statuses.sort_by_key(|status| status.code());
    statuses.dedup();

    let mut section = String::from("EXIT STATUS:\n");
    for status in statuses {
        let _ = writeln!(section, "  {:>3}  {}", status.code(), status.description());
    }
    section
}

/// Manual epilogue for `split-path`
pub fn split_path_manual() -> String {
    format!(
        "Prints PATH followed by each of its parent directories, ending at /.\n\
         Each segment is followed by DELIMITER, written literally.\n\n{}",
        exit_status_section(&[ExitStatus::TooManyArguments])
    )
}

/// Manual epilogue for `find-root`
pub fn find_root_manual() -> String {
    format!(
        "Walks upward from PATH and prints the first directory that contains\n\
         any INDICATOR. Indicators given on the command line replace the\n\
         default ('.git').\n\n\
         When no root is found: -q hides the message, -l reports it on stdout\n\
         and exits 0.\n\n{}",
        exit_status_section(&[ExitStatus::RootNotFound])
    )
}

/// Manual epilogue for `open-remote`
pub fn open_remote_manual() -> String {
    format!(
        "Looks up REMOTE for the git working tree of every PATH and opens all\n\
         URLs in one browser invocation. One bad path aborts the batch.\n\
         Without -b, $BROWSER is used, otherwise the browser is asked for\n\
         interactively. Requires git 2.7.0 or newer.\n\n{}",
        exit_status_section(&[
            ExitStatus::GitUnavailable,
            ExitStatus::GitTooOld,
            ExitStatus::NotAWorkTree,
            ExitStatus::RemoteNotFound,
            ExitStatus::BrowserUnavailable,
        ])
    )
}
