//! envinfo - Local toolchain diagnostics for bug reports.
//!
//! Collects the versions of the operating system, Node.js, Yarn, npm,
//! Watchman, Xcode and Android Studio into a plain-text report, optionally
//! followed by the project's declared vs installed dependency versions.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`host`] - Platform identification, filesystem access and test fakes
//! - [`packages`] - `package.json` dependency auditing
//! - [`probes`] - One probe per reported tool
//! - [`report`] - Report assembly, clipboard copy and printing
//! - [`shell`] - External command execution and PATH lookup
//!
//! # Example
//!
//! ```
//! use envinfo::packages::PackageSelector;
//! use envinfo::report::ReportOptions;
//!
//! let options: ReportOptions = serde_json::from_str(r#"{"packages": "react,jest"}"#).unwrap();
//! assert_eq!(
//!     options.packages,
//!     PackageSelector::Named(vec!["react".to_string(), "jest".to_string()])
//! );
//! ```

pub mod cli;
pub mod error;
pub mod host;
pub mod packages;
pub mod probes;
pub mod report;
pub mod shell;

pub use error::{EnvinfoError, Result};

use std::path::Path;

use anyhow::{anyhow, Context};
use probes::ProbeContext;
use report::{ReportOptions, Reporter};

/// Print the report for the project in the current directory to stdout.
///
/// Returns whether a report was printed.
pub fn print(options: &ReportOptions) -> Result<bool> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    print_for(&cwd, options)
}

/// Print the report for the project at `project_root` to stdout.
///
/// Fails before probing anything when `project_root` is not a directory.
pub fn print_for(project_root: &Path, options: &ReportOptions) -> Result<bool> {
    if !project_root.is_dir() {
        return Err(anyhow!("Project directory not found: {}", project_root.display()).into());
    }
    let reporter = Reporter::new(ProbeContext::system(project_root));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    reporter.print(options, &mut out)
}
