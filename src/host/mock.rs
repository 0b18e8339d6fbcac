//! In-memory host capabilities for testing.
//!
//! `MockHost`, `MockRunner` and `MockFileSystem` stand in for the real
//! platform, process and filesystem so probes and reports can be checked
//! without any of the tools installed.
//!
//! # Example
//!
//! ```
//! use envinfo::host::mock::{MockFileSystem, MockHost, MockRunner};
//! use envinfo::host::Platform;
//! use envinfo::probes::{NodeProbe, Probe, ProbeContext};
//!
//! let host = MockHost::new(Platform::Linux);
//! let runner = MockRunner::new().with_output("node --version", "v18.2.0\n");
//! let fs = MockFileSystem::new();
//! let ctx = ProbeContext::new(&host, &runner, &fs, "/work");
//!
//! assert_eq!(NodeProbe.probe(&ctx), "18.2.0");
//! assert_eq!(runner.calls(), vec!["node --version".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EnvinfoError, Result};
use crate::shell::{display_command, CommandRunner};

use super::{FileSystem, HostInfo, Platform};

/// Fixed platform and release identifiers.
#[derive(Debug, Clone)]
pub struct MockHost {
    platform: Platform,
    identifier: String,
    release: Option<String>,
}

impl MockHost {
    /// Create a host for a platform, with no known release.
    pub fn new(platform: Platform) -> Self {
        let identifier = match platform {
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Other => "",
        };
        Self {
            platform,
            identifier: identifier.to_string(),
            release: None,
        }
    }

    /// Set the kernel release identifier.
    pub fn with_release(mut self, release: &str) -> Self {
        self.release = Some(release.to_string());
        self
    }

    /// Set the raw platform identifier.
    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = identifier.to_string();
        self
    }
}

impl HostInfo for MockHost {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn identifier(&self) -> String {
        self.identifier.clone()
    }

    fn release(&self) -> Option<String> {
        self.release.clone()
    }
}

/// Command runner with canned outputs.
///
/// Commands are keyed by their display form (`program arg1 arg2`). Any
/// command without a canned output fails as not found.
#[derive(Debug, Default)]
pub struct MockRunner {
    outputs: HashMap<String, String>,
    failures: HashMap<String, i32>,
    executables: HashMap<String, PathBuf>,
    input_sinks: HashSet<String>,
    calls: RefCell<Vec<String>>,
    inputs: RefCell<Vec<(String, String)>>,
}

impl MockRunner {
    /// Create a runner that knows no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a command succeed with the given standard output.
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), stdout.to_string());
        self
    }

    /// Make a command exit with a non-zero code.
    pub fn with_failure(mut self, command: &str, code: i32) -> Self {
        self.failures.insert(command.to_string(), code);
        self
    }

    /// Make a PATH lookup succeed.
    pub fn with_executable(mut self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.executables.insert(name.to_string(), path.into());
        self
    }

    /// Accept standard input for a command (e.g. a clipboard tool).
    pub fn with_input_sink(mut self, command: &str) -> Self {
        self.input_sinks.insert(command.to_string());
        self
    }

    /// Every command run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Every `(command, input)` pair accepted by an input sink.
    pub fn inputs(&self) -> Vec<(String, String)> {
        self.inputs.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        if let Some(code) = self.failures.get(&command) {
            return Err(EnvinfoError::CommandFailed {
                command,
                code: Some(*code),
            });
        }

        match self.outputs.get(&command) {
            Some(stdout) => Ok(stdout.trim().to_string()),
            None => Err(EnvinfoError::CommandNotFound { command }),
        }
    }

    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<()> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        if self.input_sinks.contains(&command) {
            self.inputs
                .borrow_mut()
                .push((command, input.to_string()));
            Ok(())
        } else {
            Err(EnvinfoError::CommandNotFound { command })
        }
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        self.executables.get(name).cloned()
    }
}

/// Filesystem holding a fixed set of text files.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MockFileSystem {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }
}
