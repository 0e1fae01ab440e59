//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use efield_viz::config::AppConfig;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("EFV_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("EFV_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("EFV_CHARGES__MAX_CHARGES", "7");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("EFV_CHARGES__MAX_CHARGES");
    assert_eq!(config.charges.max_charges, 7);
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("EFV_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    assert_eq!(config.table.width, 3.0);
    assert_eq!(config.table.grid_spacing, 0.05);
    assert_eq!(config.rendering.shader_dir.to_str(), Some("shaders"));
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 800\nheight = 600\nfullscreen = false\nvsync = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("user.toml"),
        "[window]\ntitle = \"Mine\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.window.title, "Mine");
    assert_eq!(config.window.width, 800);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path().join("absent")).unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.charges.max_charges, 20);
}

#[test]
#[serial]
fn test_invalid_value_is_error() {
    std::env::set_var("EFV_WINDOW__WIDTH", "wide");
    let result = AppConfig::load();
    std::env::remove_var("EFV_WINDOW__WIDTH");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_out_of_range_values_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[table]\nwidth = 0.0\ngrid_spacing = 1e-9\ngrid_jitter = 0.025\n\n\
         [charges]\nmagnitude = 0.0\nangular_step = 0.01\nmax_charges = 20\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.table.width, 3.0);
    assert_eq!(config.table.grid_spacing, 0.05);
    assert_eq!(config.charges.magnitude, 4e-12);

    let state = config.simulation_state(1000, 500);
    assert_eq!(state.charge_magnitude(), 4e-12);
    assert_eq!(config.grid_generator().point_count(state.table()), 3600);
}

#[test]
#[serial]
fn test_zero_magnitude_from_env_falls_back() {
    std::env::set_var("EFV_CHARGES__MAGNITUDE", "0");
    let config = AppConfig::load();
    std::env::remove_var("EFV_CHARGES__MAGNITUDE");
    assert_eq!(config.unwrap().charges.magnitude, 4e-12);
}

#[test]
#[serial]
fn test_extract_defers_validation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[charges]\nmagnitude = 0.0\nangular_step = 0.01\nmax_charges = 20\n",
    )
    .unwrap();

    let mut config = AppConfig::extract_from(dir.path()).unwrap();
    assert_eq!(config.charges.magnitude, 0.0);
    config.validate();
    assert_eq!(config.charges.magnitude, 4e-12);
}
