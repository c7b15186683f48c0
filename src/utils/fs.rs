//! File system utility functions
//!
//! Thin wrappers over `std::fs` checks used by the path and root commands.

use crate::error::{Result, ToolError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Utility struct for file system checks
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Check if `path` is a directory that can be entered
    ///
    /// Stats `path/.`, which fails unless the directory grants search
    /// permission.
    #[instrument(skip(self))]
    pub fn is_enterable<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> bool {
        let path = path.as_ref();
        let enterable = fs::metadata(path.join(".")).is_ok_and(|meta| meta.is_dir());
        debug!("Directory {} enterable: {}", path.display(), enterable);
        enterable
    }

    /// Check if `dir` has a direct child named `name`
    ///
    /// Only existence is tested; files, directories and symlinks to either
    /// all count.
    pub fn has_child<P: AsRef<Path>>(&self, dir: P, name: &str) -> bool {
        dir.as_ref().join(name).exists()
    }

    /// Check if a path exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().exists()
    }

    /// Check if a path exists and is a directory
    pub fn is_dir<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().is_dir()
    }

    /// Get the current working directory
    pub fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(|e| ToolError::file_system("getcwd", ".", e))
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
