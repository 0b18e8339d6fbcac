//! Report options.

use serde::Deserialize;

use crate::packages::PackageSelector;

/// What to do when the packages section is requested but the project
/// manifest cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingManifestPolicy {
    /// Keep the Environment section and print an error line in place of
    /// the packages.
    #[default]
    ReportError,
    /// Drop the whole report; nothing is printed or copied.
    DiscardReport,
}

/// Options accepted by [`Reporter::print`](super::Reporter::print).
///
/// Deserializes from an options object such as
/// `{"packages": "react,react-native", "clipboard": true}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Dependencies to audit.
    pub packages: PackageSelector,
    /// Also copy the report to the system clipboard.
    pub clipboard: bool,
    /// Behavior when `package.json` is missing.
    pub on_missing_manifest: MissingManifestPolicy,
}

impl ReportOptions {
    /// Options with no packages section and no clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dependencies to audit.
    pub fn with_packages(mut self, packages: PackageSelector) -> Self {
        self.packages = packages;
        self
    }

    /// Enable or disable clipboard copying.
    pub fn with_clipboard(mut self, clipboard: bool) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Set the missing-manifest behavior.
    pub fn with_missing_manifest_policy(mut self, policy: MissingManifestPolicy) -> Self {
        self.on_missing_manifest = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let options: ReportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ReportOptions::default());
        assert!(!options.packages.is_enabled());
        assert_eq!(options.on_missing_manifest, MissingManifestPolicy::ReportError);
    }

    #[test]
    fn full_object() {
        let options: ReportOptions = serde_json::from_str(
            r#"{"packages": ["react"], "clipboard": true, "on_missing_manifest": "discard_report"}"#,
        )
        .unwrap();
        assert_eq!(
            options,
            ReportOptions::new()
                .with_packages(PackageSelector::Named(vec!["react".to_string()]))
                .with_clipboard(true)
                .with_missing_manifest_policy(MissingManifestPolicy::DiscardReport)
        );
    }

    #[test]
    fn packages_true_selects_all() {
        let options: ReportOptions = serde_json::from_str(r#"{"packages": true}"#).unwrap();
        assert_eq!(options.packages, PackageSelector::All);
    }

    #[test]
    fn falsy_packages_values_skip_section() {
        for json in [r#"{"packages": ""}"#, r#"{"packages": null}"#, r#"{"packages": false}"#] {
            let options: ReportOptions = serde_json::from_str(json).unwrap();
            assert!(!options.packages.is_enabled(), "{} enabled packages", json);
        }
    }
}
