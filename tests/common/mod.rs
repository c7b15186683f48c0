//! Helpers shared by the binary tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Build a `Command` targeting one of the cargo-built binaries.
pub fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env_remove("RUST_LOG").env_remove("BROWSER");
    cmd
}

/// A temporary directory and its canonical path.
pub fn workspace() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().canonicalize().unwrap();
    (tmp, base)
}

/// Ancestors of `path`, nearest first, each followed by a newline.
pub fn ancestor_lines(path: &Path) -> String {
    path.ancestors()
        .map(|p| format!("{}\n", p.display()))
        .collect()
}

/// Write an executable shell script.
pub fn script(path: &Path, body: &str) -> PathBuf {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

/// A fake browser that records its arguments, one per line, in `log`.
pub fn recording_browser(dir: &Path, log: &Path) -> PathBuf {
    script(
        &dir.join("browser"),
        &format!("printf '%s\\n' \"$@\" > '{}.tmp' && mv '{0}.tmp' '{0}'", log.display()),
    )
}

/// Wait for a detached process to write `path`.
pub fn wait_for_file(path: &Path) -> Option<String> {
    for _ in 0..150 {
        if let Ok(content) = fs::read_to_string(path) {
            return Some(content);
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    None
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

/// Initialize a git repository at `dir` with an `origin` remote.
pub fn git_repo(dir: &Path, origin: &str) {
    fs::create_dir_all(dir).unwrap();
    for args in [
        vec!["init", "-q"],
        vec!["remote", "add", "origin", origin],
    ] {
        let status = std::process::Command::new("git")
            .args(&args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed");
    }
}
