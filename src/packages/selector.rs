//! Which dependencies to audit.

use serde::Deserialize;

/// Selection of declared dependencies to audit.
///
/// Deserializes from the same shapes the `packages` option accepts:
/// `false`, `true`, `"a,b"` or `["a", "b"]`. `null` and a blank string
/// skip the section like `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<RawSelector>")]
pub enum PackageSelector {
    /// Skip the packages section.
    #[default]
    None,
    /// Every declared dependency.
    All,
    /// Only these names, in this order.
    Named(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelector {
    Flag(bool),
    List(String),
    Names(Vec<String>),
}

impl From<Option<RawSelector>> for PackageSelector {
    fn from(raw: Option<RawSelector>) -> Self {
        match raw {
            None | Some(RawSelector::Flag(false)) => PackageSelector::None,
            Some(RawSelector::Flag(true)) => PackageSelector::All,
            Some(RawSelector::List(list)) if list.trim().is_empty() => PackageSelector::None,
            Some(RawSelector::List(list)) => PackageSelector::from_list(&list),
            Some(RawSelector::Names(names)) => PackageSelector::from_names(names),
        }
    }
}

impl PackageSelector {
    /// Parse a comma-separated list of names.
    pub fn from_list(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    /// Select an explicit list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        PackageSelector::Named(names)
    }

    /// Whether the packages section should be produced at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, PackageSelector::None)
    }
}
