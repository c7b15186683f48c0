//! Version string comparison
//!
//! Tool version banners rarely hold strict semver (`git version 2.39.5 (Apple
//! Git-154)`, `2.45.1.windows.1`), so the first `MAJOR.MINOR[.PATCH]` group
//! is extracted before comparing with `semver`.

use crate::error::{Result, ToolError};
use regex::Regex;
use semver::Version;

/// Parser for version numbers embedded in free-form text
#[derive(Debug)]
pub struct VersionParser {
    re_version: Regex,
}

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_version: Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?")
                .map_err(|e| ToolError::internal(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Extract the first version number from `text`
    ///
    /// A missing patch component counts as `0`.
    pub fn extract(&self, text: &str) -> Option<Version> {
        let caps = self.re_version.captures(text)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Version::new(major, minor, patch))
    }
}

/// Check whether `found` is at least `minimum`
pub fn meets_minimum(found: &Version, minimum: &Version) -> bool {
    found >= minimum
}
