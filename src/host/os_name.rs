//! Human-readable operating system names.
//!
//! Turns a platform plus kernel release into names like `macOS Sonoma`,
//! `Linux 6.5` or `Windows 10`.

use regex::Regex;
use std::sync::LazyLock;

use super::Platform;

static MAJOR_MINOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+\.\d+)").unwrap());

/// Darwin major release to marketing name.
const MACOS_NAMES: &[(u32, &str)] = &[
    (25, "Tahoe"),
    (24, "Sequoia"),
    (23, "Sonoma"),
    (22, "Ventura"),
    (21, "Monterey"),
    (20, "Big Sur"),
    (19, "Catalina"),
    (18, "Mojave"),
    (17, "High Sierra"),
    (16, "Sierra"),
    (15, "El Capitan"),
    (14, "Yosemite"),
    (13, "Mavericks"),
    (12, "Mountain Lion"),
    (11, "Lion"),
    (10, "Snow Leopard"),
    (9, "Leopard"),
    (8, "Tiger"),
    (7, "Panther"),
    (6, "Jaguar"),
    (5, "Puma"),
];

/// NT release to Windows name.
const WINDOWS_NAMES: &[(&str, &str)] = &[
    ("10.0", "10"),
    ("6.3", "8.1"),
    ("6.2", "8"),
    ("6.1", "7"),
    ("6.0", "Vista"),
    ("5.2", "Server 2003"),
    ("5.1", "XP"),
    ("5.0", "2000"),
];

/// First Windows build number that ships as Windows 11.
const WINDOWS_11_BUILD: u64 = 22000;

/// First Windows build number that ships as Windows 10.
const WINDOWS_10_BUILD: u64 = 10240;

/// Resolve a display name for the host OS.
///
/// Returns `None` when not even the platform can be named.
pub fn os_name(platform: Platform, identifier: &str, release: Option<&str>) -> Option<String> {
    let release = release.map(str::trim).filter(|r| !r.is_empty());

    match platform {
        Platform::MacOS => Some(macos_name(release)),
        Platform::Linux => Some(match release {
            Some(r) => format!("Linux {}", major_minor(r)),
            None => "Linux".to_string(),
        }),
        Platform::Windows => Some(match release.and_then(windows_name) {
            Some(name) => format!("Windows {}", name),
            None => "Windows".to_string(),
        }),
        Platform::Other => {
            let identifier = identifier.trim();
            if identifier.is_empty() {
                return None;
            }
            Some(match release {
                Some(r) => format!("{} {}", identifier, r),
                None => identifier.to_string(),
            })
        }
    }
}

fn macos_name(release: Option<&str>) -> String {
    let major = release.and_then(|r| r.split('.').next()?.parse::<u32>().ok());
    let Some(major) = major else {
        return "macOS".to_string();
    };

    match MACOS_NAMES.iter().find(|(m, _)| *m == major) {
        Some((m, name)) if *m > 15 => format!("macOS {}", name),
        Some((_, name)) => format!("OS X {}", name),
        None => "macOS".to_string(),
    }
}

fn major_minor(release: &str) -> &str {
    MAJOR_MINOR
        .captures(release)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(release)
}

fn windows_name(release: &str) -> Option<String> {
    // Some hosts report only the build number.
    if let Ok(build) = release.parse::<u64>() {
        return match build {
            b if b >= WINDOWS_11_BUILD => Some("11".to_string()),
            b if b >= WINDOWS_10_BUILD => Some("10".to_string()),
            _ => None,
        };
    }

    let version = major_minor(release);
    if version == "10.0" {
        let build = release
            .split('.')
            .nth(2)
            .and_then(|b| b.parse::<u64>().ok());
        if build.is_some_and(|b| b >= WINDOWS_11_BUILD) {
            return Some("11".to_string());
        }
    }

    WINDOWS_NAMES
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, name)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_modern_release() {
        assert_eq!(
            os_name(Platform::MacOS, "macos", Some("23.1.0")),
            Some("macOS Sonoma".to_string())
        );
        assert_eq!(
            os_name(Platform::MacOS, "macos", Some("16.7.0")),
            Some("macOS Sierra".to_string())
        );
    }

    #[test]
    fn macos_legacy_release_is_os_x() {
        assert_eq!(
            os_name(Platform::MacOS, "macos", Some("15.6.0")),
            Some("OS X El Capitan".to_string())
        );
    }

    #[test]
    fn macos_unknown_release() {
        assert_eq!(
            os_name(Platform::MacOS, "macos", Some("99.0.0")),
            Some("macOS".to_string())
        );
        assert_eq!(
            os_name(Platform::MacOS, "macos", None),
            Some("macOS".to_string())
        );
    }

    #[test]
    fn linux_keeps_major_minor() {
        assert_eq!(
            os_name(Platform::Linux, "linux", Some("6.5.0-14-generic")),
            Some("Linux 6.5".to_string())
        );
        assert_eq!(
            os_name(Platform::Linux, "linux", None),
            Some("Linux".to_string())
        );
    }

    #[test]
    fn linux_unparseable_release_is_kept() {
        assert_eq!(
            os_name(Platform::Linux, "linux", Some("custom")),
            Some("Linux custom".to_string())
        );
    }

    #[test]
    fn windows_releases() {
        assert_eq!(
            os_name(Platform::Windows, "windows", Some("10.0.19045")),
            Some("Windows 10".to_string())
        );
        assert_eq!(
            os_name(Platform::Windows, "windows", Some("10.0.22631")),
            Some("Windows 11".to_string())
        );
        assert_eq!(
            os_name(Platform::Windows, "windows", Some("6.1.7601")),
            Some("Windows 7".to_string())
        );
    }

    #[test]
    fn windows_bare_build_number() {
        assert_eq!(
            os_name(Platform::Windows, "windows", Some("22631")),
            Some("Windows 11".to_string())
        );
        assert_eq!(
            os_name(Platform::Windows, "windows", Some("19045")),
            Some("Windows 10".to_string())
        );
    }

    #[test]
    fn windows_unknown_release() {
        assert_eq!(
            os_name(Platform::Windows, "windows", Some("3.1")),
            Some("Windows".to_string())
        );
    }

    #[test]
    fn other_platform_uses_identifier() {
        assert_eq!(
            os_name(Platform::Other, "freebsd", Some("14.0-RELEASE")),
            Some("freebsd 14.0-RELEASE".to_string())
        );
        assert_eq!(
            os_name(Platform::Other, "freebsd", None),
            Some("freebsd".to_string())
        );
    }

    #[test]
    fn other_platform_without_identifier_is_unresolved() {
        assert_eq!(os_name(Platform::Other, "", Some("1.0")), None);
    }
}
