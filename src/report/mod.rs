//! Report assembly and output.
//!
//! The [`Reporter`] runs the baseline probes in order, optionally appends
//! the packages section, then copies and prints the result.
//!
//! # Example
//!
//! ```
//! use envinfo::host::mock::{MockFileSystem, MockHost, MockRunner};
//! use envinfo::host::Platform;
//! use envinfo::probes::ProbeContext;
//! use envinfo::report::{ReportOptions, Reporter};
//!
//! let host = MockHost::new(Platform::Linux).with_release("6.5.0");
//! let runner = MockRunner::new().with_output("node --version", "v20.11.1");
//! let fs = MockFileSystem::new();
//! let reporter = Reporter::new(ProbeContext::new(&host, &runner, &fs, "/work"));
//!
//! let report = reporter.build(&ReportOptions::new()).unwrap();
//! assert_eq!(report.lines()[2], "  OS: Linux 6.5");
//! assert_eq!(report.lines()[3], "  Node: 20.11.1");
//! ```

pub mod clipboard;
pub mod options;

use std::fmt;
use std::io::Write;

use crate::error::{EnvinfoError, Result};
use crate::packages::{DependencyAuditor, PackageSelector};
use crate::probes::{baseline_probes, Probe, ProbeContext};

pub use clipboard::copy_to_clipboard;
pub use options::{MissingManifestPolicy, ReportOptions};

/// Line printed in place of the packages when `package.json` is unreadable.
pub const MISSING_MANIFEST_LINE: &str = "ERROR: package.json not found!";

/// An ordered sequence of report lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Builds and prints the environment report.
pub struct Reporter<'a> {
    ctx: ProbeContext<'a>,
    probes: Vec<Box<dyn Probe>>,
}

impl<'a> Reporter<'a> {
    /// Create a reporter running the standard probes.
    pub fn new(ctx: ProbeContext<'a>) -> Self {
        Self::with_probes(ctx, baseline_probes())
    }

    /// Create a reporter running a custom probe list.
    pub fn with_probes(ctx: ProbeContext<'a>, probes: Vec<Box<dyn Probe>>) -> Self {
        Self { ctx, probes }
    }

    /// Build the report.
    ///
    /// Returns `None` only when the manifest is missing and the options ask
    /// for the report to be discarded in that case.
    pub fn build(&self, options: &ReportOptions) -> Option<Report> {
        let mut report = self.build_baseline();

        if options.packages.is_enabled()
            && !self.append_packages(&mut report, &options.packages)
            && options.on_missing_manifest == MissingManifestPolicy::DiscardReport
        {
            tracing::debug!("Discarding report: package.json is unreadable");
            return None;
        }

        Some(report)
    }

    /// Build the report, copy it to the clipboard if asked, and write it to `out`.
    ///
    /// Returns whether anything was written. Clipboard failures are logged
    /// and do not stop printing.
    pub fn print<W: Write>(&self, options: &ReportOptions, out: &mut W) -> Result<bool> {
        let Some(report) = self.build(options) else {
            return Ok(false);
        };
        let text = report.text();

        if options.clipboard {
            if let Err(e) = copy_to_clipboard(self.ctx.runner, self.ctx.platform(), &text) {
                tracing::warn!("Could not copy report to clipboard: {}", e);
            }
        }

        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(true)
    }

    fn build_baseline(&self) -> Report {
        let mut report = Report::new();
        report.push("");
        report.push("Environment:");
        for probe in &self.probes {
            let value = probe.probe(&self.ctx);
            tracing::debug!("{}: {}", probe.label(), value);
            report.push(format!("  {}: {}", probe.label(), value));
        }
        report.push("");
        report
    }

    /// Append the packages section. Returns `false` when the manifest was
    /// unreadable (an error line is appended instead).
    fn append_packages(&self, report: &mut Report, selector: &PackageSelector) -> bool {
        let auditor = DependencyAuditor::new(self.ctx.fs, self.ctx.cwd());

        match auditor.audit(selector) {
            Ok(records) => {
                report.push("Packages: (wanted => installed)");
                for record in records {
                    report.push(format!("  {}", record));
                }
                report.push("");
                true
            }
            Err(e) => {
                match &e {
                    EnvinfoError::ManifestParse { .. } => tracing::warn!("{}", e),
                    _ => tracing::warn!("No package.json in {}", auditor.root().display()),
                }
                report.push(MISSING_MANIFEST_LINE);
                report.push("");
                false
            }
        }
    }
}
