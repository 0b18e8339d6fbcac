//! Host platform identification and filesystem access.
//!
//! Probes never read the process environment or the filesystem directly;
//! they go through [`HostInfo`] and [`FileSystem`] so tests can substitute
//! the in-memory fakes from [`mock`].

pub mod mock;
pub mod os_name;

use std::io;
use std::path::Path;

pub use os_name::os_name;

/// Host platform, as far as the probes care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Map a platform identifier (`std::env::consts::OS` or a Node-style
    /// `process.platform` value) to a platform.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "macos" | "darwin" => Platform::MacOS,
            "linux" => Platform::Linux,
            "windows" | "win32" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// Detect the current platform.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }
}

/// Platform and release identifiers reported by the host.
pub trait HostInfo {
    /// The host platform.
    fn platform(&self) -> Platform;

    /// Raw platform identifier (e.g. `linux`, `freebsd`).
    fn identifier(&self) -> String;

    /// Kernel release identifier (e.g. `23.1.0` on macOS, `6.5.0-14-generic` on Linux).
    fn release(&self) -> Option<String>;
}

/// [`HostInfo`] for the machine envinfo runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostInfo for SystemHost {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn identifier(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn release(&self) -> Option<String> {
        sysinfo::System::kernel_version()
    }
}

/// Read-only filesystem access.
pub trait FileSystem {
    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let result = std::fs::read_to_string(path);
        if let Err(e) = &result {
            tracing::debug!("Could not read {}: {}", path.display(), e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_from_rust_identifiers() {
        assert_eq!(Platform::from_identifier("macos"), Platform::MacOS);
        assert_eq!(Platform::from_identifier("linux"), Platform::Linux);
        assert_eq!(Platform::from_identifier("windows"), Platform::Windows);
    }

    #[test]
    fn platform_from_node_identifiers() {
        assert_eq!(Platform::from_identifier("darwin"), Platform::MacOS);
        assert_eq!(Platform::from_identifier("win32"), Platform::Windows);
    }

    #[test]
    fn unknown_identifiers_are_other() {
        assert_eq!(Platform::from_identifier("freebsd"), Platform::Other);
        assert_eq!(Platform::from_identifier(""), Platform::Other);
    }

    #[test]
    fn current_matches_compile_target() {
        let expected = if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        };
        assert_eq!(Platform::current(), expected);
    }

    #[test]
    fn real_fs_reads_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("build.txt");
        std::fs::write(&path, "AI-223.8836.35.2231.10406996\n").unwrap();

        let content = RealFileSystem.read_to_string(&path).unwrap();
        assert_eq!(content, "AI-223.8836.35.2231.10406996\n");
    }

    #[test]
    fn real_fs_missing_file_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(RealFileSystem
            .read_to_string(&temp.path().join("missing.txt"))
            .is_err());
    }
}
