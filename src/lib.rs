//! # pathtools
//!
//! Small command-line helpers built on one argument and error convention:
//!
//! - `split-path` prints a path and each of its parent directories
//! - `find-root` walks upward to the nearest directory holding a marker
//!   such as `.git`
//! - `open-remote` opens the git remote URLs of working trees in a browser
//!
//! Every binary exits with a status from [`error::ExitStatus`].
//!
//! ## Example
//!
//! ```
//! use pathtools::core::segments::{split_into_segments, AbsolutePath};
//!
//! let path = AbsolutePath::new("/usr/local/bin").unwrap();
//! let segments = split_into_segments(&path, true);
//! assert_eq!(segments.as_slice(), ["/", "/usr", "/usr/local", "/usr/local/bin"]);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing::{Level, Metadata};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{self, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize logging with appropriate verbosity
///
/// Informational notices go to stdout, warnings and errors to stderr.
/// Diagnostics (`debug`/`trace`) also go to stderr, but only with `debug`
/// or when `RUST_LOG` asks for them.
pub fn setup_logging(debug: bool) -> Result<()> {
    let diagnostics = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::OFF.into())
            .from_env_lossy()
    };
    let ansi = utils::tty::is_stderr_tty();

    let notices = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_level(true)
        .without_time()
        .with_ansi(false)
        .with_filter(filter::filter_fn(|meta: &Metadata<'_>| {
            *meta.level() == Level::INFO
        }));

    let problems = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .without_time()
        .with_ansi(ansi)
        .with_filter(filter::filter_fn(|meta: &Metadata<'_>| {
            *meta.level() <= Level::WARN
        }));

    let traces = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .without_time()
        .with_ansi(ansi)
        .compact()
        .with_filter(diagnostics)
        .with_filter(filter::filter_fn(|meta: &Metadata<'_>| {
            *meta.level() >= Level::DEBUG
        }));

    tracing_subscriber::registry()
        .with(notices)
        .with(problems)
        .with(traces)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
