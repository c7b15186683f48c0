//! Remote URL aggregation and browser dispatch
//!
//! Resolves the git remote URL for each input path and hands the whole
//! batch to a browser process in one invocation.

use crate::{
    error::{Result, ToolError},
    utils::{
        fs::FileSystemUtils,
        process::ProcessRunner,
        tty,
        version::{VersionParser, meets_minimum},
    },
};
use semver::Version;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// `git remote get-url` first shipped in git 2.7.0
pub const MIN_GIT_VERSION: Version = Version::new(2, 7, 0);

/// Remote queried when none is named
pub const DEFAULT_REMOTE: &str = "origin";

/// Environment variable consulted when no browser flag is given
pub const BROWSER_ENV: &str = "BROWSER";

/// A browser command line: the program plus leading arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Browser {
    pub command: String,
    pub args: Vec<String>,
}

impl Browser {
    /// Split a browser setting on whitespace, e.g. `firefox --new-window`
    ///
    /// Returns `None` for a blank value.
    pub fn parse(value: &str) -> Option<Self> {
        let mut words = value.split_whitespace().map(str::to_string);
        let command = words.next()?;
        Some(Self {
            command,
            args: words.collect(),
        })
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Looks up git remotes and launches the browser
#[derive(Debug)]
pub struct RemoteOpener {
    git: String,
    process_runner: ProcessRunner,
    fs_utils: FileSystemUtils,
}

impl RemoteOpener {
    /// Create an opener that runs `git` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_git("git")
    }

    /// Create an opener that runs the given git executable
    #[must_use]
    pub fn with_git(git: impl Into<String>) -> Self {
        Self {
            git: git.into(),
            process_runner: ProcessRunner::new(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Verify git runs and is at least `minimum`
    #[instrument(skip(self))]
    pub fn check_git(&self, minimum: &Version) -> Result<Version> {
        let result = self
            .process_runner
            .run_command_with_output(&self.git, &["--version"])
            .map_err(|e| ToolError::GitUnavailable {
                message: e.to_string(),
            })?;

        let banner = result.stdout.trim();
        let found = VersionParser::new()?
            .extract(banner)
            .ok_or_else(|| ToolError::GitUnavailable {
                message: format!("unrecognized version output: {banner}"),
            })?;

        debug!("Found git {} (minimum {})", found, minimum);
        if !meets_minimum(&found, minimum) {
            return Err(ToolError::GitTooOld {
                found: found.to_string(),
                required: minimum.to_string(),
            });
        }
        Ok(found)
    }

    /// Resolve the URL of `remote` for the working tree containing `path`
    #[instrument(skip(self))]
    pub fn resolve_url(&self, path: &Path, remote: &str) -> Result<String> {
        if !self.fs_utils.exists(path) {
            return Err(ToolError::invalid_argument(
                path.display().to_string(),
                "no such file or directory",
            ));
        }

        let dir = if self.fs_utils.is_dir(path) {
            path
        } else {
            path.parent().unwrap_or(Path::new("/"))
        };

        let inside = self
            .process_runner
            .run_command_in(&self.git, &["rev-parse", "--is-inside-work-tree"], dir)
            .map(|result| result.stdout.trim() == "true")
            .unwrap_or_else(|e| {
                debug!("Work tree check failed: {}", e);
                false
            });
        if !inside {
            return Err(ToolError::NotAWorkTree {
                path: path.to_path_buf(),
            });
        }

        let url = self
            .process_runner
            .run_command_in(&self.git, &["remote", "get-url", remote], dir)
            .map(|result| result.stdout.trim().to_string())
            .inspect_err(|e| debug!("Remote lookup failed: {}", e))
            .ok()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ToolError::RemoteNotFound {
                remote: remote.to_string(),
                path: path.to_path_buf(),
            })?;

        debug!("Remote {} of {} is {}", remote, path.display(), url);
        Ok(url)
    }

    /// Resolve every path; the first failure aborts the whole batch
    pub fn resolve_urls(&self, paths: &[PathBuf], remote: &str) -> Result<Vec<String>> {
        paths
            .iter()
            .map(|path| self.resolve_url(path, remote))
            .collect()
    }

    /// Check that the browser command resolves
    pub fn validate_browser(&self, browser: &Browser) -> Result<()> {
        if self.process_runner.command_exists(&browser.command) {
            Ok(())
        } else {
            Err(ToolError::BrowserUnavailable {
                browser: browser.to_string(),
            })
        }
    }

    /// Ask for a browser until an available command is entered
    ///
    /// End of input is reported as an unavailable browser.
    pub fn prompt_browser<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Browser> {
        loop {
            let Some(line) = tty::prompt_line(input, output, "Browser command: ")? else {
                return Err(ToolError::BrowserUnavailable {
                    browser: "<none entered>".to_string(),
                });
            };

            let Some(browser) = Browser::parse(&line) else {
                continue;
            };
            match self.validate_browser(&browser) {
                Ok(()) => return Ok(browser),
                Err(_) => warn!("'{}' is not an available command", browser.command),
            }
        }
    }

    /// Start the browser with all URLs as arguments, without waiting
    #[instrument(skip(self))]
    pub fn launch(&self, browser: &Browser, urls: &[String]) -> Result<u32> {
        let args: Vec<&str> = browser
            .args
            .iter()
            .chain(urls)
            .map(String::as_str)
            .collect();

        self.process_runner
            .spawn_detached(&browser.command, &args)
            .map_err(|e| {
                debug!("Browser launch failed: {}", e);
                ToolError::BrowserUnavailable {
                    browser: browser.to_string(),
                }
            })
    }
}

impl Default for RemoteOpener {
    fn default() -> Self {
        Self::new()
    }
}
