//! Toolchain probes.
//!
//! Each probe answers one question ("which Node is installed?") with a
//! display string. Probes never fail: anything that goes wrong collapses
//! into one of the sentinel strings below.
//!
//! # Modules
//!
//! - [`os`] - Operating system name and version
//! - [`runtime`] - Node.js runtime version
//! - [`package_manager`] - Yarn and npm versions
//! - [`watchman`] - Watchman file watcher version
//! - [`xcode`] - Xcode version (macOS only)
//! - [`android_studio`] - Android Studio version, per platform

pub mod android_studio;
pub mod os;
pub mod package_manager;
pub mod runtime;
pub mod watchman;
pub mod xcode;

use std::path::{Path, PathBuf};

use crate::host::{FileSystem, HostInfo, Platform, RealFileSystem, SystemHost};
use crate::shell::{CommandRunner, SystemRunner};

pub use android_studio::AndroidStudioProbe;
pub use os::OsProbe;
pub use package_manager::PackageManagerProbe;
pub use runtime::NodeProbe;
pub use watchman::WatchmanProbe;
pub use xcode::XcodeProbe;

/// The tool or file could not be found or queried.
pub const NOT_FOUND: &str = "Not Found";

/// The tool does not exist on this platform.
pub const NOT_APPLICABLE: &str = "N/A";

/// The OS was identified but its version could not be.
pub const UNKNOWN_VERSION: &str = "Unknown Version";

/// Capabilities handed to every probe.
pub struct ProbeContext<'a> {
    /// Platform and release identifiers.
    pub host: &'a dyn HostInfo,
    /// External program execution and PATH lookup.
    pub runner: &'a dyn CommandRunner,
    /// File reads.
    pub fs: &'a dyn FileSystem,
    /// Project directory (where `package.json` lives).
    pub cwd: PathBuf,
}

impl<'a> ProbeContext<'a> {
    /// Create a context from explicit capabilities.
    pub fn new(
        host: &'a dyn HostInfo,
        runner: &'a dyn CommandRunner,
        fs: &'a dyn FileSystem,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host,
            runner,
            fs,
            cwd: cwd.into(),
        }
    }

    /// The host platform.
    pub fn platform(&self) -> Platform {
        self.host.platform()
    }

    /// The project directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl ProbeContext<'static> {
    /// Create a context backed by the real machine.
    pub fn system(cwd: impl Into<PathBuf>) -> Self {
        Self::new(&SystemHost, &SystemRunner, &RealFileSystem, cwd)
    }
}

/// A single self-contained check that yields a display string.
pub trait Probe {
    /// Label shown before the result in the report.
    fn label(&self) -> &str;

    /// Run the check. Never fails; failures become sentinel strings.
    fn probe(&self, ctx: &ProbeContext<'_>) -> String;
}

/// The Environment section probes, in report order.
pub fn baseline_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(OsProbe),
        Box::new(NodeProbe),
        Box::new(PackageManagerProbe::yarn()),
        Box::new(PackageManagerProbe::npm()),
        Box::new(WatchmanProbe),
        Box::new(XcodeProbe),
        Box::new(AndroidStudioProbe),
    ]
}

/// Run a command, mapping any failure to `None` with a debug log.
pub(crate) fn run_or_none(ctx: &ProbeContext<'_>, program: &str, args: &[&str]) -> Option<String> {
    match ctx.runner.run(program, args) {
        Ok(out) => Some(out),
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    }
}

/// Join multi-line command output into a single line.
pub(crate) fn join_lines(output: &str) -> String {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
