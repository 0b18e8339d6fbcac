//! `package.json` manifests.
//!
//! Only the fields the auditor needs are read; everything else in the file
//! is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{EnvinfoError, Result};
use crate::host::FileSystem;

/// File name of a Node.js package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The parts of a `package.json` the auditor cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Concrete version of this package.
    #[serde(default)]
    pub version: Option<String>,

    /// Runtime dependencies (name → wanted range).
    #[serde(default)]
    pub dependencies: Map<String, Value>,

    /// Development dependencies (name → wanted range).
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest text.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| EnvinfoError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse `<dir>/package.json`.
    pub fn load(fs: &dyn FileSystem, dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs
            .read_to_string(&path)
            .map_err(|_| EnvinfoError::ManifestNotFound { path: path.clone() })?;
        Self::parse(&content, &path)
    }

    /// All declared dependencies with their wanted ranges.
    ///
    /// `devDependencies` are laid down first and `dependencies` merged over
    /// them: on a name collision the runtime range wins but the entry keeps
    /// its first-seen position. Entries whose range is empty, `null` or
    /// `false` are dropped.
    pub fn declared_dependencies(&self) -> Vec<(String, String)> {
        let mut merged = self.dev_dependencies.clone();
        for (name, wanted) in &self.dependencies {
            merged.insert(name.clone(), wanted.clone());
        }

        merged
            .into_iter()
            .filter_map(|(name, wanted)| range_text(&wanted).map(|w| (name, w)))
            .collect()
    }
}

fn range_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Bool(false) => None,
        other => Some(other.to_string()),
    }
}
