//! Node.js runtime probe.

use super::{run_or_none, Probe, ProbeContext, NOT_FOUND};

/// Reports `node --version` without its leading `v`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeProbe;

impl Probe for NodeProbe {
    fn label(&self) -> &str {
        "Node"
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> String {
        run_or_none(ctx, "node", &["--version"])
            .map(|v| strip_version_prefix(&v).to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

/// Strip exactly one leading `v` (`v18.2.0` → `18.2.0`).
pub fn strip_version_prefix(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
