//! Command implementations for the CLI
//!
//! Each command writes its data to `out` and returns the status to exit
//! with. User-facing notices are logged here, outside any span, so they
//! print as one plain line.

use crate::{
    config::{OpenConfig, RootConfig, SplitConfig},
    core::{remote::RemoteOpener, root::find_root, segments::split_into_segments},
    error::{ExitStatus, Result, ToolError},
};
use std::io::{self, Write};
use tracing::{debug, info};

/// Execute `split-path`
pub fn execute_split<W: Write>(config: &SplitConfig, out: &mut W) -> Result<ExitStatus> {
    let segments = split_into_segments(&config.path, config.reversed);
    debug!("Split {} into {} segments", config.path, segments.len());

    segments
        .write_to(out, &config.delimiter)
        .map_err(ToolError::Output)?;
    Ok(ExitStatus::Success)
}

/// Execute `find-root`
///
/// A missing root is an error unless `lenient`; `quiet` suppresses the
/// message either way.
pub fn execute_root<W: Write>(config: &RootConfig, out: &mut W) -> Result<ExitStatus> {
    if let Some(root) = find_root(&config.start, &config.indicators) {
        writeln!(out, "{root}").map_err(ToolError::Output)?;
        out.flush().map_err(ToolError::Output)?;
        return Ok(ExitStatus::Success);
    }

    let not_found = ToolError::RootNotFound {
        start: config.start.to_string(),
        indicators: config.indicators.to_string(),
    };

    match (config.quiet, config.lenient) {
        (true, true) => Ok(ExitStatus::Success),
        (true, false) => Ok(not_found.exit_status()),
        (false, true) => {
            info!("{not_found}");
            Ok(ExitStatus::Success)
        }
        (false, false) => Err(not_found),
    }
}

/// Execute `open-remote`
///
/// An explicit browser is checked before git; without one the user is
/// asked only after every URL has been resolved.
pub fn execute_open(config: &OpenConfig) -> Result<ExitStatus> {
    let opener = RemoteOpener::new();

    if let Some(browser) = &config.browser {
        opener.validate_browser(browser)?;
    }

    let version = opener.check_git(&config.min_git_version)?;
    debug!("Using git {}", version);

    let urls = opener.resolve_urls(&config.paths, &config.remote)?;

    let browser = match &config.browser {
        Some(browser) => browser.clone(),
        None => opener.prompt_browser(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let pid = opener.launch(&browser, &urls)?;
    debug!("Opened {} URL(s) with {} (pid {})", urls.len(), browser, pid);
    Ok(ExitStatus::Success)
}
