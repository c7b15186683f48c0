//! Configuration for each binary
//!
//! Built once from parsed arguments and the working directory, then passed
//! by reference into the command that needs it.

use crate::{
    cli::{OpenArgs, RootArgs, SplitArgs},
    core::{
        remote::{Browser, DEFAULT_REMOTE, MIN_GIT_VERSION},
        root::IndicatorSet,
        segments::{AbsolutePath, DEFAULT_DELIMITER, resolve_path},
    },
    error::{Result, ToolError},
};
use semver::Version;
use std::path::{Path, PathBuf};

/// Configuration for `split-path`
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Path whose ancestors are printed
    pub path: AbsolutePath,
    /// Print root first
    pub reversed: bool,
    /// Written after every segment
    pub delimiter: String,
}

impl SplitConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &SplitArgs, cwd: &Path) -> Result<Self> {
        if args.paths.len() > 1 {
            return Err(ToolError::TooManyArguments {
                expected: 1,
                given: args.paths.len(),
            });
        }

        let path = resolve_path(args.paths.first().map(String::as_str), args.lenient, cwd)?;

        Ok(Self {
            path,
            reversed: args.reverse,
            delimiter: args
                .delimiter
                .clone()
                .unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
        })
    }
}

/// Configuration for `find-root`
#[derive(Debug, Clone)]
pub struct RootConfig {
    /// Directory the upward search starts from
    pub start: AbsolutePath,
    /// Root marker names
    pub indicators: IndicatorSet,
    /// Report a missing root as information and succeed
    pub lenient: bool,
    /// Report nothing when the root is missing
    pub quiet: bool,
}

impl RootConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &RootArgs, cwd: &Path) -> Result<Self> {
        let indicators = IndicatorSet::from_names(args.indicators.iter().cloned())?;
        let start = resolve_path(args.path.as_deref(), args.lenient, cwd)?;

        Ok(Self {
            start,
            indicators,
            lenient: args.lenient,
            quiet: args.quiet,
        })
    }
}

/// Configuration for `open-remote`
#[derive(Debug, Clone)]
pub struct OpenConfig {
    /// Absolute paths whose remotes are opened, in input order
    pub paths: Vec<PathBuf>,
    /// Remote name looked up in every working tree
    pub remote: String,
    /// Browser from `-b` or the environment; `None` means ask
    pub browser: Option<Browser>,
    /// Oldest git accepted
    pub min_git_version: Version,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            remote: DEFAULT_REMOTE.to_string(),
            browser: None,
            min_git_version: MIN_GIT_VERSION,
        }
    }
}

impl OpenConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &OpenArgs, cwd: &Path) -> Result<Self> {
        if args.paths.iter().any(|path| path.as_os_str().is_empty()) {
            return Err(ToolError::invalid_argument("", "path is empty"));
        }

        let paths = if args.paths.is_empty() {
            vec![cwd.to_path_buf()]
        } else {
            args.paths.iter().map(|path| cwd.join(path)).collect()
        };

        let config = Self {
            paths,
            remote: args.remote.clone(),
            browser: args.browser.as_deref().and_then(Browser::parse),
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(ToolError::invalid_argument(
                self.remote.clone(),
                "remote name is empty",
            ));
        }

        if let Some(path) = self.paths.iter().find(|path| !path.is_absolute()) {
            return Err(ToolError::internal(format!(
                "path was not resolved: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cwd() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().canonicalize().unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_split_config_defaults() {
        let (_temp_dir, cwd) = cwd();
        let args = SplitArgs::try_parse_from(["split-path"]).unwrap();
        let config = SplitConfig::from_args(&args, &cwd).unwrap();

        assert_eq!(config.path.as_path(), cwd);
        assert_eq!(config.delimiter, "\n");
        assert!(!config.reversed);
    }

    #[test]
    fn test_split_config_too_many_arguments() {
        let (_temp_dir, cwd) = cwd();
        let args = SplitArgs::try_parse_from(["split-path", "/", "/tmp"]).unwrap();
        let err = SplitConfig::from_args(&args, &cwd).unwrap_err();
        assert!(matches!(
            err,
            ToolError::TooManyArguments {
                expected: 1,
                given: 2
            }
        ));
    }

    #[test]
    fn test_root_config_replaces_default_indicators() {
        let (_temp_dir, cwd) = cwd();
        fs::create_dir(cwd.join("sub")).unwrap();
        let args = RootArgs::try_parse_from(["find-root", "-p", "sub", "Cargo.toml", "Cargo.toml"])
            .unwrap();
        let config = RootConfig::from_args(&args, &cwd).unwrap();

        assert_eq!(config.start.as_path(), cwd.join("sub"));
        assert_eq!(config.indicators.iter().collect::<Vec<_>>(), vec!["Cargo.toml"]);
    }

    #[test]
    fn test_root_config_lenient_start() {
        let (_temp_dir, cwd) = cwd();
        let args = RootArgs::try_parse_from(["find-root", "-p", "/no/such/dir"]).unwrap();
        assert!(RootConfig::from_args(&args, &cwd).is_err());

        let args = RootArgs::try_parse_from(["find-root", "-l", "-p", "/no/such/dir"]).unwrap();
        let config = RootConfig::from_args(&args, &cwd).unwrap();
        assert_eq!(config.start.as_str(), "/no/such/dir");
        assert!(config.lenient);
    }

    #[test]
    fn test_open_config_resolves_paths() {
        let (_temp_dir, cwd) = cwd();
        let args = OpenArgs::try_parse_from([
            "open-remote",
            "-b",
            "firefox --new-window",
            "-r",
            "upstream",
            "a",
            "/abs",
        ])
        .unwrap();
        let config = OpenConfig::from_args(&args, &cwd).unwrap();

        assert_eq!(config.paths, vec![cwd.join("a"), PathBuf::from("/abs")]);
        assert_eq!(config.remote, "upstream");
        let browser = config.browser.unwrap();
        assert_eq!(browser.command, "firefox");
        assert_eq!(browser.args, vec!["--new-window".to_string()]);
        assert_eq!(config.min_git_version, Version::new(2, 7, 0));
    }

    #[test]
    fn test_open_config_blank_browser_means_prompt() {
        let (_temp_dir, cwd) = cwd();
        let args = OpenArgs::try_parse_from(["open-remote", "-b", "  "]).unwrap();
        let config = OpenConfig::from_args(&args, &cwd).unwrap();
        assert_eq!(config.paths, vec![cwd]);
        assert!(config.browser.is_none());
    }

    #[test]
    fn test_open_config_rejects_empty_remote() {
        let (_temp_dir, cwd) = cwd();
        let args = OpenArgs::try_parse_from(["open-remote", "-b", "x", "-r", ""]).unwrap();
        let err = OpenConfig::from_args(&args, &cwd).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { .. }));
    }
}
