//! Operating system probe.

use crate::host::{os_name, Platform};

use super::{run_or_none, Probe, ProbeContext, UNKNOWN_VERSION};

/// Reports the OS name, refined with the product version on macOS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl Probe for OsProbe {
    fn label(&self) -> &str {
        "OS"
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> String {
        let host = ctx.host;
        let release = host.release();
        let Some(name) = os_name(host.platform(), &host.identifier(), release.as_deref()) else {
            tracing::debug!("Could not name platform {:?}", host.identifier());
            return UNKNOWN_VERSION.to_string();
        };

        if host.platform() != Platform::MacOS {
            return name;
        }

        match run_or_none(ctx, "sw_vers", &["-productVersion"]).filter(|v| !v.is_empty()) {
            Some(version) => format!("{} {}", name, version),
            None => format!("{} {}", name, UNKNOWN_VERSION),
        }
    }
}
