//! Android Studio probe.
//!
//! Each platform keeps the IDE version somewhere different:
//!
//! - macOS: the application bundle's `Info.plist`, read with `PlistBuddy`
//! - Linux: `build.txt` plus the `~/.AndroidStudioX.Y` config path baked
//!   into `bin/studio.sh`
//! - Windows: the file version of `studio.exe` (via `wmic`) plus `build.txt`

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::host::Platform;

use super::{join_lines, run_or_none, Probe, ProbeContext, NOT_FOUND};

const MACOS_INFO_PLIST: &str = "/Applications/Android Studio.app/Contents/Info.plist";
const PLIST_BUDDY: &str = "/usr/libexec/PlistBuddy";

const LINUX_BUILD_FILE: &str = "/opt/android-studio/build.txt";
const LINUX_LAUNCH_SCRIPT: &str = "/opt/android-studio/bin/studio.sh";
const LINUX_CONFIG_MARKER: &str = "/.AndroidStudio";

/// WQL filter for `wmic datafile where`. Must not contain `"`: Windows
/// argument quoting would escape it before wmic sees it.
const WINDOWS_STUDIO_EXE_QUERY: &str =
    r"name='C:\\Program Files\\Android\\Android Studio\\bin\\studio.exe'";
const WINDOWS_BUILD_FILE: &str = r"C:\Program Files\Android\Android Studio\build.txt";

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d\.\d").unwrap());

/// Reports the installed Android Studio version.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidStudioProbe;

impl Probe for AndroidStudioProbe {
    fn label(&self) -> &str {
        "Android Studio"
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> String {
        let version = match ctx.platform() {
            Platform::MacOS => macos_version(ctx),
            Platform::Linux => linux_version(ctx),
            Platform::Windows => windows_version(ctx),
            Platform::Other => None,
        };
        version.unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

fn macos_version(ctx: &ProbeContext<'_>) -> Option<String> {
    let out = run_or_none(
        ctx,
        PLIST_BUDDY,
        &[
            "-c",
            "Print:CFBundleShortVersionString",
            "-c",
            "Print:CFBundleVersion",
            MACOS_INFO_PLIST,
        ],
    )?;
    Some(join_lines(&out)).filter(|v| !v.is_empty())
}

fn linux_version(ctx: &ProbeContext<'_>) -> Option<String> {
    let build = read_file(ctx, LINUX_BUILD_FILE)?;
    let script = read_file(ctx, LINUX_LAUNCH_SCRIPT)?;
    let version = launch_script_version(&script)?;
    Some(format!("{} {}", version, build.trim()))
}

fn windows_version(ctx: &ProbeContext<'_>) -> Option<String> {
    let out = run_or_none(
        ctx,
        "wmic",
        &["datafile", "where", WINDOWS_STUDIO_EXE_QUERY, "get", "Version"],
    )?;
    let version = wmic_value(&out)?;
    let build = strip_line_terminators(&read_file(ctx, WINDOWS_BUILD_FILE)?);
    Some(format!("{} {}", version, build.trim()))
}

fn read_file(ctx: &ProbeContext<'_>, path: &str) -> Option<String> {
    ctx.fs.read_to_string(Path::new(path)).ok()
}

/// Extract the `X.Y` token from the first launch script line naming the
/// `~/.AndroidStudioX.Y` config directory.
pub fn launch_script_version(script: &str) -> Option<&str> {
    let line = script.lines().find(|l| l.contains(LINUX_CONFIG_MARKER))?;
    VERSION_TOKEN.find(line).map(|m| m.as_str())
}

/// The value row of a single-column `wmic ... get <Column>` table.
fn wmic_value(output: &str) -> Option<String> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

fn strip_line_terminators(text: &str) -> String {
    text.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}
