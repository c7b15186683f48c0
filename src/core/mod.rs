//! Core functionality shared by the binaries
//!
//! Path segmentation, root discovery and remote URL resolution.

pub mod remote;
pub mod root;
pub mod segments;

pub use remote::{Browser, RemoteOpener};
pub use root::{IndicatorSet, find_root};
pub use segments::{AbsolutePath, Segments, resolve_path, split_into_segments};
