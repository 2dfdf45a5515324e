//! `autopilot check`: verifies the project layout before a launch.

use crate::preflight::Preflight;
use crate::server::PortManager;

use ap_config::Config;

use std::path::Path;

/// One verified item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub section: &'static str,
    pub label: String,
    pub passed: bool,
    /// Port and dependency notes that do not fail the check
    pub warning: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub items: Vec<CheckItem>,
}

impl CheckReport {
    pub fn all_passed(&self) -> bool {
        self.items.iter().all(|i| i.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckItem> {
        self.items.iter().filter(|i| !i.passed)
    }

    fn file(&mut self, section: &'static str, label: &str, path: &Path) {
        let (passed, detail) = match std::fs::metadata(path) {
            Ok(meta) => (
                true,
                format!("found ({:.1} MB)", meta.len() as f64 / (1024.0 * 1024.0)),
            ),
            Err(_) => (false, format!("NOT FOUND, expected at {}", path.display())),
        };

        self.items.push(CheckItem {
            section,
            label: label.to_string(),
            passed,
            warning: false,
            detail,
        });
    }

    fn note(&mut self, section: &'static str, label: String, ok: bool, detail: &str) {
        self.items.push(CheckItem {
            section,
            label,
            passed: true,
            warning: !ok,
            detail: detail.to_string(),
        });
    }

    /// Render the report for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut section = "";

        for item in &self.items {
            if item.section != section {
                section = item.section;
                out.push_str(&format!("\n{section}:\n"));
            }

            let mark = match (item.passed, item.warning) {
                (false, _) => "❌",
                (true, true) => "⚠️ ",
                (true, false) => "✅",
            };
            out.push_str(&format!("  {mark} {}: {}\n", item.label, item.detail));
        }

        out.push('\n');
        if self.all_passed() {
            out.push_str("All checks passed! System is ready to launch.\n");
        } else {
            out.push_str(&format!(
                "{} checks failed. Please fix the issues above.\n",
                self.failures().count()
            ));
        }

        out
    }
}

/// Check scripts, weights, UI files, the manifest, dependencies and ports.
///
/// Missing files fail the check. Busy ports and missing modules are
/// reported as warnings: the launcher reuses running servers and installs
/// dependencies itself.
pub fn run_checks(config: &Config, config_dir: &Path, check_modules: bool) -> CheckReport {
    let mut report = CheckReport::default();

    for server in config.enabled_servers() {
        report.file("Server scripts", &server.name, &config_dir.join(&server.script));
    }

    for server in config.enabled_servers() {
        if let Some(weights) = &server.weights {
            report.file("Model weights", &server.name, &config_dir.join(weights));
        }
    }

    report.file("UI files", &config.ui.path, &config.ui_path(config_dir));
    for extra in &config.ui.extra_files {
        report.file("UI files", extra, &config_dir.join(extra));
    }

    if config.preflight.enabled {
        report.file(
            "Dependencies",
            &config.preflight.manifest,
            &config_dir.join(&config.preflight.manifest),
        );

        if check_modules && !config.launcher.interpreter.trim().is_empty() {
            let preflight =
                Preflight::new(&config.launcher.interpreter, &config.preflight, config_dir);
            for module in &config.preflight.modules {
                let installed = preflight.is_installed(module);
                report.note(
                    "Dependencies",
                    module.name.clone(),
                    installed,
                    if installed { "installed" } else { "NOT INSTALLED" },
                );
            }
        }
    }

    for server in config.enabled_servers() {
        let in_use = PortManager::is_in_use(server.port);
        report.note(
            "Ports",
            format!("Port {}", server.port),
            !in_use,
            if in_use { "already in use" } else { "available" },
        );
    }

    report
}
