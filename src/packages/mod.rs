//! Project dependency auditing.
//!
//! Reads the project's `package.json`, then looks up each selected
//! dependency's installed version under `node_modules/`.
//!
//! # Modules
//!
//! - [`manifest`] - `package.json` parsing and dependency merging
//! - [`selector`] - Which dependencies to audit
//! - [`auditor`] - Wanted vs installed resolution

pub mod auditor;
pub mod manifest;
pub mod selector;

pub use auditor::{DependencyAuditor, DependencyRecord, NOT_INSTALLED};
pub use manifest::{PackageManifest, MANIFEST_FILE};
pub use selector::PackageSelector;
