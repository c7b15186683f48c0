//! Project root discovery
//!
//! Walks the ancestors of a start path, nearest first, and stops at the
//! first directory holding any of the configured indicator names.

use crate::{
    core::segments::{AbsolutePath, split_into_segments},
    error::{Result, ToolError},
    utils::fs::FileSystemUtils,
};
use std::fmt;
use tracing::{debug, instrument};

/// Indicator used when the caller names none
pub const DEFAULT_INDICATOR: &str = ".git";

/// Ordered, duplicate-free set of root marker names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSet {
    names: Vec<String>,
}

impl IndicatorSet {
    /// Build a set from caller-supplied names
    ///
    /// An empty list yields the default set. A non-empty list replaces the
    /// default entirely. Names must be plain file names.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            validate_indicator(&name)?;
            if !set.contains(&name) {
                set.push(name);
            }
        }

        if set.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self { names: set })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IndicatorSet {
    fn default() -> Self {
        Self {
            names: vec![DEFAULT_INDICATOR.to_string()],
        }
    }
}

impl fmt::Display for IndicatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}

fn validate_indicator(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ToolError::invalid_argument(name, "indicator is empty"));
    }
    if name == "." || name == ".." {
        return Err(ToolError::invalid_argument(
            name,
            "indicator must name a file or directory",
        ));
    }
    if name.contains('/') {
        return Err(ToolError::invalid_argument(
            name,
            "indicator must not contain '/'",
        ));
    }
    Ok(())
}

/// Find the nearest ancestor of `start` (inclusive) holding an indicator
///
/// Returns `None` when no directory up to and including the root matches.
#[instrument(skip(indicators), fields(indicators = %indicators))]
pub fn find_root(start: &AbsolutePath, indicators: &IndicatorSet) -> Option<String> {
    let fs_utils = FileSystemUtils::new();

    for ancestor in split_into_segments(start, false) {
        if let Some(hit) = indicators
            .iter()
            .find(|name| fs_utils.has_child(&ancestor, name))
        {
            debug!("Found indicator {} in {}", hit, ancestor);
            return Some(ancestor);
        }
        debug!("No indicator in {}", ancestor);
    }

    None
}
