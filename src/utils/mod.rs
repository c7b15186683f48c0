//! Utility modules for common functionality
//!
//! Provides reusable utilities for file system checks, process execution,
//! prompting and version comparison.

pub mod fs;
pub mod process;
pub mod tty;
pub mod version;

pub use fs::FileSystemUtils;
pub use process::ProcessRunner;
pub use version::VersionParser;
