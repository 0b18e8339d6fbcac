//! Xcode probe.

use crate::host::Platform;

use super::{join_lines, run_or_none, Probe, ProbeContext, NOT_APPLICABLE, NOT_FOUND};

/// Reports `xcodebuild -version` on macOS, `N/A` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct XcodeProbe;

impl Probe for XcodeProbe {
    fn label(&self) -> &str {
        "Xcode"
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> String {
        match ctx.platform() {
            Platform::MacOS => {}
            Platform::Linux | Platform::Windows | Platform::Other => {
                return NOT_APPLICABLE.to_string();
            }
        }

        ctx.runner
            .find_executable("xcodebuild")
            .and_then(|path| run_or_none(ctx, &path.to_string_lossy(), &["-version"]))
            .map(|out| join_lines(&out))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}
