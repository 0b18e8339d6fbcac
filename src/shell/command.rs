//! Shell command execution.
//!
//! Probes talk to external programs through the [`CommandRunner`] trait so
//! they can be exercised against [`MockRunner`](crate::host::mock::MockRunner)
//! in tests. [`SystemRunner`] is the real implementation.

use crate::error::{EnvinfoError, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::path::{parse_system_path, resolve_tool_path};

/// Runs external programs synchronously.
pub trait CommandRunner {
    /// Run a program and return its trimmed standard output.
    ///
    /// Standard error is discarded. Fails with
    /// [`EnvinfoError::CommandNotFound`] when the program cannot be spawned
    /// and [`EnvinfoError::CommandFailed`] when it exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Run a program, writing `input` to its standard input.
    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<()>;

    /// Locate an executable on PATH.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;
}

/// [`CommandRunner`] backed by `std::process::Command` and the real PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = display_command(program, args);
        tracing::debug!("Running {}", command);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::null())
            .output()
            .map_err(|_| EnvinfoError::CommandNotFound {
                command: command.clone(),
            })?;

        if !output.status.success() {
            return Err(EnvinfoError::CommandFailed {
                command,
                code: output.status.code(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<()> {
        let command = display_command(program, args);
        tracing::debug!("Piping {} bytes into {}", input.len(), command);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|_| EnvinfoError::CommandNotFound {
                command: command.clone(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(EnvinfoError::CommandFailed {
                command,
                code: status.code(),
            })
        }
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let found = resolve_tool_path(name, &parse_system_path());
        tracing::debug!("PATH lookup for {}: {:?}", name, found);
        found
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
