//! Process execution utilities
//!
//! Runs external commands with captured output, checks whether a command
//! resolves on `PATH`, and launches detached background processes.

use crate::error::{Result, ToolError};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Utility for running external processes
#[derive(Debug, Default)]
pub struct ProcessRunner;

/// Result of a process execution
#[derive(Debug)]
pub struct ProcessResult {
    /// Standard output
    pub stdout: String,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a command and capture its output
    #[instrument(skip(self))]
    pub fn run_command_with_output(&self, command: &str, args: &[&str]) -> Result<ProcessResult> {
        self.run(Command::new(command), command, args)
    }

    /// Run a command inside `cwd` and capture its output
    #[instrument(skip(self))]
    pub fn run_command_in(
        &self,
        command: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<ProcessResult> {
        let mut cmd = Command::new(command);
        cmd.current_dir(cwd);
        self.run(cmd, command, args)
    }

    fn run(&self, mut cmd: Command, command: &str, args: &[&str]) -> Result<ProcessResult> {
        let cmd_str = format!("{} {}", command, args.join(" "));
        debug!("Running command with output capture: {}", cmd_str);

        let output = cmd
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ToolError::spawn(cmd_str.clone(), e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            output.status.success(),
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if !output.status.success() {
            debug!("Command stderr: {}", stderr.trim_end());
            return Err(ToolError::process(cmd_str, exit_code, stdout, stderr));
        }

        Ok(ProcessResult { stdout })
    }

    /// Check if a command resolves on `PATH` (or as a path to an executable)
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        if command.is_empty() {
            return false;
        }

        let result = Command::new("sh")
            .args(["-c", "command -v \"$1\"", "sh", command])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }

    /// Start a command in the background without waiting for it
    ///
    /// Standard streams are detached and the child is never reaped by us.
    /// Returns the child's process id.
    #[instrument(skip(self))]
    pub fn spawn_detached(&self, command: &str, args: &[&str]) -> Result<u32> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        let child = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ToolError::spawn(cmd_str.clone(), e))?;

        let pid = child.id();
        debug!("Started {} in background with pid {}", cmd_str, pid);
        Ok(pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_command_with_output() {
        let runner = ProcessRunner::new();
        let result = runner
            .run_command_with_output("echo", &["hello", "world"])
            .unwrap();

        assert_eq!(result.stdout.trim(), "hello world");
    }

    #[test]
    fn test_run_command_in_directory() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessRunner::new();
        let result = runner.run_command_in("pwd", &["-P"], temp_dir.path()).unwrap();

        assert_eq!(
            result.stdout.trim(),
            temp_dir.path().canonicalize().unwrap().to_str().unwrap()
        );
    }

    #[test]
    fn test_command_exists() {
        let runner = ProcessRunner::new();

        assert!(runner.command_exists("sh"));
        assert!(runner.command_exists("ls"));

        assert!(!runner.command_exists("nonexistent_command_12345"));
        assert!(!runner.command_exists(""));
    }

    #[test]
    fn test_run_failing_command() {
        let runner = ProcessRunner::new();
        let result = runner.run_command_with_output("false", &[]);

        if let Err(ToolError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false ");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected ProcessError");
        }
    }

    #[test]
    fn test_run_missing_command() {
        let runner = ProcessRunner::new();
        let result = runner.run_command_with_output("nonexistent_command_12345", &[]);

        assert!(matches!(
            result,
            Err(ToolError::Process {
                exit_code: None,
                source: Some(_),
                ..
            })
        ));
    }

    #[test]
    fn test_spawn_detached() {
        let runner = ProcessRunner::new();
        let pid = runner.spawn_detached("true", &[]).unwrap();
        assert!(pid > 0);

        assert!(runner.spawn_detached("nonexistent_command_12345", &[]).is_err());
    }
}
