//! PATH lookup for the tools envinfo reports on.
//!
//! Walks `PATH` directly instead of shelling out to `which`/`where`.

use std::path::{Path, PathBuf};

/// Suffixes tried, in order, for each PATH entry.
#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &["", ".exe", ".cmd", ".bat"];

#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

/// Whether any execute bit is set on `path`.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match path.metadata() {
        Ok(meta) => meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Any existing file counts; the suffix list decides what is runnable.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Find `tool` in the first PATH entry that holds it.
///
/// Within one entry the bare name wins over suffixed variants
/// (`watchman.exe`, `watchman.cmd`, ...).
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries.iter().find_map(|dir| {
        EXECUTABLE_SUFFIXES
            .iter()
            .map(|suffix| dir.join(format!("{}{}", tool, suffix)))
            .find(|candidate| candidate.is_file() && is_executable(candidate))
    })
}

/// The directories listed in `PATH`, in lookup order.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn install_tool(dir: &Path, file_name: &str, mode: u32) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(file_name);
        fs::write(&path, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        }
        #[cfg(not(unix))]
        let _ = mode;
        path
    }

    #[test]
    fn homebrew_watchman_shadows_system_one() {
        let temp = TempDir::new().unwrap();
        let homebrew = temp.path().join("opt/homebrew/bin");
        let system = temp.path().join("usr/local/bin");
        let expected = install_tool(&homebrew, "watchman", 0o755);
        install_tool(&system, "watchman", 0o755);

        assert_eq!(resolve_tool_path("watchman", &[homebrew, system]), Some(expected));
    }

    #[test]
    fn later_entry_used_when_earlier_lacks_tool() {
        let temp = TempDir::new().unwrap();
        let node_bin = temp.path().join("node/bin");
        let usr_bin = temp.path().join("usr/bin");
        install_tool(&node_bin, "npm", 0o755);
        let expected = install_tool(&usr_bin, "xcodebuild", 0o755);

        assert_eq!(resolve_tool_path("xcodebuild", &[node_bin, usr_bin]), Some(expected));
    }

    #[test]
    fn empty_path_finds_nothing() {
        assert!(resolve_tool_path("watchman", &[]).is_none());
    }

    #[test]
    fn directory_named_like_tool_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("watchman")).unwrap();

        assert!(resolve_tool_path("watchman", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn unmarked_file_does_not_count_as_installed() {
        let temp = TempDir::new().unwrap();
        let stale = temp.path().join("stale");
        let live = temp.path().join("live");
        install_tool(&stale, "watchman", 0o644);
        let expected = install_tool(&live, "watchman", 0o755);

        assert!(!is_executable(&stale.join("watchman")));
        assert_eq!(resolve_tool_path("watchman", &[stale, live]), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn exe_suffix_is_not_tried_off_windows() {
        let temp = TempDir::new().unwrap();
        install_tool(temp.path(), "watchman.exe", 0o755);

        assert!(resolve_tool_path("watchman", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(windows)]
    #[test]
    fn exe_suffix_is_tried_on_windows() {
        let temp = TempDir::new().unwrap();
        let expected = install_tool(temp.path(), "watchman.exe", 0);

        assert_eq!(
            resolve_tool_path("watchman", &[temp.path().to_path_buf()]),
            Some(expected)
        );
    }

    #[cfg(windows)]
    #[test]
    fn cmd_shim_found_when_no_exe() {
        let temp = TempDir::new().unwrap();
        let expected = install_tool(temp.path(), "yarn.cmd", 0);

        assert_eq!(resolve_tool_path("yarn", &[temp.path().to_path_buf()]), Some(expected));
    }

    #[test]
    fn missing_file_is_not_executable() {
        assert!(!is_executable(Path::new("/nonexistent/bin/watchman")));
    }
}
