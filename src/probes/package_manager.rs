//! Package manager probes.

use super::{run_or_none, Probe, ProbeContext, NOT_FOUND};

/// Reports a package manager's version from its version flag.
#[derive(Debug, Clone)]
pub struct PackageManagerProbe {
    label: String,
    program: String,
    args: Vec<String>,
}

impl PackageManagerProbe {
    /// Create a probe running `program args...`.
    pub fn new(label: &str, program: &str, args: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// `yarn --version`
    pub fn yarn() -> Self {
        Self::new("Yarn", "yarn", &["--version"])
    }

    /// `npm -v`
    pub fn npm() -> Self {
        Self::new("npm", "npm", &["-v"])
    }
}

impl Probe for PackageManagerProbe {
    fn label(&self) -> &str {
        &self.label
    }

    fn probe(&self, ctx: &ProbeContext<'_>) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        run_or_none(ctx, &self.program, &args).unwrap_or_else(|| NOT_FOUND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::{MockFileSystem, MockHost, MockRunner};
    use crate::host::Platform;

    fn probe_with(probe: &PackageManagerProbe, runner: &MockRunner) -> String {
        let host = MockHost::new(Platform::MacOS);
        let fs = MockFileSystem::new();
        let ctx = ProbeContext::new(&host, runner, &fs, "/work");
        probe.probe(&ctx)
    }

    #[test]
    fn yarn_runs_version_flag() {
        let runner = MockRunner::new().with_output("yarn --version", "1.22.19\n");
        assert_eq!(probe_with(&PackageManagerProbe::yarn(), &runner), "1.22.19");
        assert_eq!(runner.calls(), vec!["yarn --version".to_string()]);
    }

    #[test]
    fn npm_runs_short_flag() {
        let runner = MockRunner::new().with_output("npm -v", "10.2.4");
        assert_eq!(probe_with(&PackageManagerProbe::npm(), &runner), "10.2.4");
    }

    #[test]
    fn missing_tool_is_not_found() {
        let runner = MockRunner::new();
        assert_eq!(probe_with(&PackageManagerProbe::yarn(), &runner), "Not Found");
        assert_eq!(probe_with(&PackageManagerProbe::npm(), &runner), "Not Found");
    }

    #[test]
    fn labels() {
        assert_eq!(PackageManagerProbe::yarn().label(), "Yarn");
        assert_eq!(PackageManagerProbe::npm().label(), "npm");
    }
}
