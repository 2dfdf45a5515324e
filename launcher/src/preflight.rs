//! Dependency check run through the configured interpreter before launch.

use crate::server::{LaunchError, LaunchResult};

use ap_config::{PreflightConfig, RequiredModule};

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{info, warn};

pub struct Preflight<'a> {
    interpreter: &'a str,
    config: &'a PreflightConfig,
    working_dir: &'a Path,
}

impl<'a> Preflight<'a> {
    pub fn new(interpreter: &'a str, config: &'a PreflightConfig, working_dir: &'a Path) -> Self {
        Self {
            interpreter: interpreter.trim(),
            config,
            working_dir,
        }
    }

    /// Whether `import <module>` succeeds in the interpreter.
    pub fn is_installed(&self, module: &RequiredModule) -> bool {
        let status = Command::new(self.interpreter)
            .arg("-c")
            .arg(format!("import {}", module.module))
            .current_dir(self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => status.success(),
            Err(e) => {
                warn!("Could not run {}: {e}", self.interpreter);
                false
            }
        }
    }

    pub fn missing_modules(&self) -> Vec<&'a RequiredModule> {
        self.config
            .modules
            .iter()
            .filter(|m| !self.is_installed(m))
            .collect()
    }

    /// Make sure every required module imports, installing the manifest once if not.
    pub fn run(&self) -> LaunchResult<()> {
        if self.interpreter.is_empty() {
            info!("No interpreter configured, skipping dependency check");
            return Ok(());
        }

        info!("Checking dependencies...");

        let missing = self.missing_modules();
        if missing.is_empty() {
            info!("All {} dependencies installed", self.config.modules.len());
            return Ok(());
        }

        for module in &missing {
            warn!("{} ({}) is not installed", module.name, module.module);
        }

        let manifest = self.working_dir.join(&self.config.manifest);
        if !manifest.exists() {
            return Err(LaunchError::dependencies_missing(names(&missing)));
        }

        info!("Installing dependencies from {}...", manifest.display());
        self.install(&manifest)?;

        let still_missing = self.missing_modules();
        if !still_missing.is_empty() {
            return Err(LaunchError::dependencies_missing(names(&still_missing)));
        }

        info!("Dependencies installed");
        Ok(())
    }

    fn install(&self, manifest: &Path) -> LaunchResult<()> {
        let status = Command::new(self.interpreter)
            .args(["-m", "pip", "install", "-r"])
            .arg(manifest)
            .args(["--quiet", "--disable-pip-version-check"])
            .current_dir(self.working_dir)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| LaunchError::dependency_install(format!("could not run pip: {e}")))?;

        if !status.success() {
            return Err(LaunchError::dependency_install(format!(
                "pip exited with {status}"
            )));
        }

        Ok(())
    }
}

fn names(modules: &[&RequiredModule]) -> String {
    modules
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
