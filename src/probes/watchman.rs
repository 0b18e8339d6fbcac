//! Watchman file watcher probe.

use super::{run_or_none, Probe, ProbeContext, NOT_FOUND};

/// Locates `watchman` on PATH and reports its version.
#[derive(Debug, Clone, Copy, Default)]
pub struct WatchmanProbe;

impl Probe for WatchmanProbe {
    fn label(&self) -> &str {
        "Watchman"
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> String {
        let Some(path) = ctx.runner.find_executable("watchman") else {
            return NOT_FOUND.to_string();
        };

        run_or_none(ctx, &path.to_string_lossy(), &["--version"])
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}
