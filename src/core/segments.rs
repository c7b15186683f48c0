//! Path segmentation
//!
//! Splits an absolute path into the ordered list of its ancestor
//! directories, and resolves command-line arguments into absolute paths.

use crate::{
    error::{Result, ToolError},
    utils::fs::FileSystemUtils,
};
use std::fmt;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument};

/// The filesystem root
pub const ROOT: &str = "/";

/// Delimiter written after each segment unless another is requested
pub const DEFAULT_DELIMITER: &str = "\n";

/// A path that starts with the root separator
///
/// One trailing separator is stripped on construction, so `/a/b/` and
/// `/a/b` are the same path. The root itself stays `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsolutePath(String);

impl AbsolutePath {
    /// Build an absolute path, returning `None` if `path` is not absolute
    pub fn new(path: impl Into<String>) -> Option<Self> {
        let mut path = path.into();
        if !path.starts_with(ROOT) {
            return None;
        }
        if path.len() > 1 && path.ends_with('/') {
            path.pop();
        }
        Some(Self(path))
    }

    /// Build an absolute path from a `Path`, rejecting non-UTF-8 names
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = path.to_str().ok_or_else(|| {
            ToolError::internal(format!("path is not valid UTF-8: {}", path.display()))
        })?;
        Self::new(text).ok_or_else(|| {
            ToolError::internal(format!("expected an absolute path: {}", path.display()))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Ordered ancestor directories of a path, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    items: Vec<String>,
}

impl Segments {
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false, the root is always present
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write every segment followed by `delimiter`, inserted literally
    pub fn write_to<W: Write>(&self, writer: &mut W, delimiter: &str) -> io::Result<()> {
        for segment in &self.items {
            writer.write_all(segment.as_bytes())?;
            writer.write_all(delimiter.as_bytes())?;
        }
        writer.flush()
    }
}

impl IntoIterator for Segments {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Split `path` into its ancestors, nearest first, ending at the root
///
/// With `reversed` the root comes first and `path` itself last.
///
/// ```
/// use pathtools::core::segments::{split_into_segments, AbsolutePath};
///
/// let path = AbsolutePath::new("/home/user/dir").unwrap();
/// let segments = split_into_segments(&path, false);
/// assert_eq!(segments.as_slice(), ["/home/user/dir", "/home/user", "/home", "/"]);
/// ```
pub fn split_into_segments(path: &AbsolutePath, reversed: bool) -> Segments {
    let mut items = Vec::new();

    if !path.is_root() {
        let mut current = path.as_str();
        loop {
            items.push(current.to_string());
            match current.rfind('/') {
                Some(0) | None => break,
                Some(index) => current = &current[..index],
            }
        }
    }
    items.push(ROOT.to_string());

    if reversed {
        items.reverse();
    }

    Segments { items }
}

/// Resolve a command-line path argument into an absolute path
///
/// A missing argument means `cwd`. Relative arguments are resolved against
/// `cwd` and must name an enterable directory. Absolute arguments must also
/// be enterable unless `lenient` is set.
#[instrument(skip(cwd))]
pub fn resolve_path(arg: Option<&str>, lenient: bool, cwd: &Path) -> Result<AbsolutePath> {
    let fs_utils = FileSystemUtils::new();

    let Some(arg) = arg else {
        debug!("No path given, using {}", cwd.display());
        return AbsolutePath::from_path(cwd);
    };

    if arg.is_empty() {
        return Err(ToolError::invalid_argument(arg, "path is empty"));
    }

    if let Some(path) = AbsolutePath::new(arg) {
        if !lenient && !fs_utils.is_enterable(path.as_path()) {
            return Err(ToolError::invalid_argument(arg, "not an enterable directory"));
        }
        return Ok(path);
    }

    let joined = normalize_lexically(&cwd.join(arg));
    debug!("Resolved relative path {} to {}", arg, joined.display());
    if !fs_utils.is_enterable(&joined) {
        return Err(ToolError::invalid_argument(arg, "not an enterable directory"));
    }
    AbsolutePath::from_path(&joined)
}

/// Resolve `.` and `..` components without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::from(ROOT);
    for component in path.components() {
        match component {
            Component::Normal(name) => normalized.push(name),
            Component::ParentDir => {
                normalized.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    normalized
}
