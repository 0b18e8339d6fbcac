//! Wanted vs installed dependency versions.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::FileSystem;

use super::manifest::PackageManifest;
use super::selector::PackageSelector;

/// Directory installed packages live in, relative to the project.
pub const INSTALL_DIR: &str = "node_modules";

/// The package has no readable manifest under `node_modules`.
pub const NOT_INSTALLED: &str = "Not Installed";

/// One audited dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Package name.
    pub name: String,
    /// Range declared in the project manifest.
    pub wanted: String,
    /// Version from the installed package's manifest, or [`NOT_INSTALLED`].
    pub installed: String,
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} => {}", self.name, self.wanted, self.installed)
    }
}

/// Compares a project's declared dependencies with what is installed.
pub struct DependencyAuditor<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> DependencyAuditor<'a> {
    /// Create an auditor for the project at `root`.
    pub fn new(fs: &'a dyn FileSystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Audit the selected dependencies.
    ///
    /// Fails only when the project manifest cannot be read or parsed. Names
    /// that are not declared are skipped without a record.
    pub fn audit(&self, selector: &PackageSelector) -> Result<Vec<DependencyRecord>> {
        if !selector.is_enabled() {
            return Ok(Vec::new());
        }

        let manifest = PackageManifest::load(self.fs, &self.root)?;
        let declared = manifest.declared_dependencies();

        let selected: Vec<&(String, String)> = match selector {
            PackageSelector::None => Vec::new(),
            PackageSelector::All => declared.iter().collect(),
            PackageSelector::Named(names) => names
                .iter()
                .filter_map(|name| {
                    let found = declared.iter().find(|(n, _)| n == name);
                    if found.is_none() {
                        tracing::debug!("{} is not declared, skipping", name);
                    }
                    found
                })
                .collect(),
        };

        Ok(selected
            .into_iter()
            .map(|(name, wanted)| DependencyRecord {
                name: name.clone(),
                wanted: wanted.clone(),
                installed: self.installed_version(name),
            })
            .collect())
    }

    /// Version of an installed package, or [`NOT_INSTALLED`].
    pub fn installed_version(&self, name: &str) -> String {
        let dir = self.package_dir(name);
        match PackageManifest::load(self.fs, &dir) {
            Ok(PackageManifest {
                version: Some(version),
                ..
            }) => version,
            Ok(_) => {
                tracing::debug!("{} has no version field", dir.display());
                NOT_INSTALLED.to_string()
            }
            Err(e) => {
                tracing::debug!("{}", e);
                NOT_INSTALLED.to_string()
            }
        }
    }

    fn package_dir(&self, name: &str) -> PathBuf {
        // Scoped names ("@scope/pkg") map onto nested directories.
        name.split('/')
            .fold(self.root.join(INSTALL_DIR), |dir, part| dir.join(part))
    }

    /// The project directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
