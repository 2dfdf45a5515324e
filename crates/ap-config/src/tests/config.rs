use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, pat};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.servers.len(), eq(5));
    assert_that!(
        config.launcher.startup_timeout_secs,
        eq(crate::DEFAULT_STARTUP_TIMEOUT_SECS)
    );
    assert_that!(config.launcher.health_check_interval_secs, eq(2));
    assert_that!(config.launcher.interpreter.as_str(), eq("python3"));
    assert_that!(config.ui.path.as_str(), eq("UI/home.html"));
}

#[test]
#[serial]
fn given_defaults_when_listing_ports_then_table_order_is_kept() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let ports: Vec<u16> = config.enabled_servers().map(|s| s.port).collect();

    // Then
    assert_that!(ports, eq(&vec![7860, 7861, 7862, 7869, 7868]));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_thresholds_when_defaults_then_upload_and_live_differ() {
    let _temp = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.performance.static_confidence_threshold, eq(0.4_f32));
    assert_that!(config.performance.live_confidence_threshold, eq(0.7_f32));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [launcher]
            startup_timeout_secs = 30
            interpreter = ""

            [[servers]]
            key = "Only"
            name = "Only Server"
            port = 9100
            script = "only/server.py"
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.launcher.startup_timeout_secs, eq(30));
    assert_that!(config.launcher.interpreter.as_str(), eq(""));
    assert_that!(config.launcher.probe_timeout_secs, eq(2));
    assert_that!(config.servers.len(), eq(1));
    assert_that!(config.servers[0].enabled, eq(true));
    assert_that!(config.servers[0].icon.as_str(), eq(""));
}

#[test]
#[serial]
fn given_disabled_server_when_enabled_servers_then_skipped() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [[servers]]
            key = "A"
            name = "A"
            port = 9100
            script = "a.py"

            [[servers]]
            key = "B"
            name = "B"
            port = 9101
            script = "b.py"
            enabled = false
        "#,
    );

    // When
    let config = Config::load().unwrap();
    let keys: Vec<&str> = config.enabled_servers().map(|s| s.key.as_str()).collect();

    // Then
    assert_that!(keys, eq(&vec!["A"]));
}

#[test]
#[serial]
fn given_explicit_dir_when_load_from_then_reads_that_dir() {
    // Given
    let _home = setup_config_dir();
    let other = tempfile::TempDir::new().unwrap();
    write_config(&other, "[launcher]\nstartup_timeout_secs = 7\n");

    // When
    let config = Config::load_from(other.path()).unwrap();

    // Then
    assert_that!(config.launcher.startup_timeout_secs, eq(7));
}

// =========================================================================
// Environment Override Tests
// =========================================================================

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[launcher]\nstartup_timeout_secs = 30\n");
    let _timeout = EnvGuard::set("AUTOPILOT_STARTUP_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.launcher.startup_timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _browser = EnvGuard::set("AUTOPILOT_AUTO_OPEN_BROWSER", "false");
    let _logs = EnvGuard::set("AUTOPILOT_SHOW_SERVER_LOGS", "1");
    let _interp = EnvGuard::set("AUTOPILOT_INTERPRETER", "python3.11");
    let _level = EnvGuard::set("AUTOPILOT_LOG_LEVEL", "debug");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.launcher.auto_open_browser, eq(false));
    assert_that!(config.launcher.show_server_logs, eq(true));
    assert_that!(config.launcher.interpreter.as_str(), eq("python3.11"));
    assert_that!(config.logging.level.as_directive(), eq("debug"));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_file_value() {
    let _temp = setup_config_dir();
    let _timeout = EnvGuard::set("AUTOPILOT_STARTUP_TIMEOUT_SECS", "soon");

    let config = Config::load().unwrap();

    assert_that!(config.launcher.startup_timeout_secs, eq(120));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[launcher\nstartup_timeout_secs = ");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(pat!(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = \"chatty\"\n");

    let config = Config::load().unwrap();

    assert_that!(config.logging.level.as_directive(), eq("info"));
}
