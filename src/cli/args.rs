//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::packages::PackageSelector;
use crate::report::{MissingManifestPolicy, ReportOptions};

/// envinfo - Print local toolchain diagnostics for bug reports.
#[derive(Debug, Parser)]
#[command(name = "envinfo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Also list project dependencies: all of them, or a comma-separated subset
    #[arg(
        long,
        env = "ENVINFO_PACKAGES",
        value_name = "NAMES",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub packages: Option<String>,

    /// Copy the report to the system clipboard as well
    #[arg(long, env = "ENVINFO_CLIPBOARD")]
    pub clipboard: bool,

    /// Print nothing at all when package.json is missing
    #[arg(long, env = "ENVINFO_DISCARD_ON_MISSING_MANIFEST")]
    pub discard_on_missing_manifest: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Translate the flags into report options.
    pub fn report_options(&self) -> ReportOptions {
        let packages = match self.packages.as_deref().map(str::trim) {
            None => PackageSelector::None,
            Some("") | Some("true") => PackageSelector::All,
            Some("false") => PackageSelector::None,
            Some(list) => PackageSelector::from_list(list),
        };

        let policy = if self.discard_on_missing_manifest {
            MissingManifestPolicy::DiscardReport
        } else {
            MissingManifestPolicy::ReportError
        };

        ReportOptions::new()
            .with_packages(packages)
            .with_clipboard(self.clipboard)
            .with_missing_manifest_policy(policy)
    }
}
