use crate::run_checks;

use ap_config::Config;

use std::path::Path;

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};
use tempfile::TempDir;

/// Create every file the default configuration expects
fn populate(dir: &Path, config: &Config) {
    let mut files: Vec<&str> = Vec::new();
    for server in &config.servers {
        files.push(&server.script);
        if let Some(weights) = &server.weights {
            files.push(weights);
        }
    }
    files.push(&config.ui.path);
    files.extend(config.ui.extra_files.iter().map(String::as_str));
    files.push(&config.preflight.manifest);

    for file in files {
        let path = dir.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"x").unwrap();
    }
}

#[test]
fn given_complete_project_when_run_checks_then_all_passed() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = Config::default();
    populate(temp.path(), &config);

    // When
    let report = run_checks(&config, temp.path(), false);

    // Then
    assert_that!(report.all_passed(), eq(true));
    assert_that!(
        report.render().as_str(),
        contains_substring("All checks passed")
    );
}

#[test]
fn given_missing_weights_when_run_checks_then_failure_names_the_file() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = Config::default();
    populate(temp.path(), &config);
    std::fs::remove_file(temp.path().join("Pedestrian_Model/last.pt")).unwrap();

    // When
    let report = run_checks(&config, temp.path(), false);

    // Then
    assert_that!(report.all_passed(), eq(false));
    let failures: Vec<_> = report.failures().collect();
    assert_that!(failures.len(), eq(1));
    assert_that!(failures[0].section, eq("Model weights"));
    assert_that!(failures[0].detail.as_str(), contains_substring("last.pt"));
    assert_that!(report.render().as_str(), contains_substring("1 checks failed"));
}

#[test]
fn given_empty_directory_when_run_checks_then_scripts_and_ui_fail() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = Config::default();

    // When
    let report = run_checks(&config, temp.path(), false);

    // Then
    let sections: Vec<&str> = report.failures().map(|i| i.section).collect();
    assert!(sections.contains(&"Server scripts"));
    assert!(sections.contains(&"UI files"));
    assert!(sections.contains(&"Dependencies"));
}

#[test]
fn given_enabled_servers_when_run_checks_then_every_port_reported_without_failing() {
    // Given
    let temp = TempDir::new().unwrap();
    let config = Config::default();
    populate(temp.path(), &config);

    // When
    let report = run_checks(&config, temp.path(), false);

    // Then
    let ports: Vec<_> = report
        .items
        .iter()
        .filter(|i| i.section == "Ports")
        .collect();
    assert_that!(ports.len(), eq(5));
    assert!(ports.iter().all(|i| i.passed));
}
