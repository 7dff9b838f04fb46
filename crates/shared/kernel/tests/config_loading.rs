use elemental_kernel::config::{ConfigError, load_config};
use elemental_kernel::domain::config::ElementalConfig;
use std::fs;

#[test]
fn loads_layered_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("elemental.toml");
    fs::write(
        &path,
        "[timing]\nframe_interval_ms = 8\n\n[logging]\nlevel = \"debug\"\njson = true\n",
    )?;

    let cfg: ElementalConfig = load_config(Some(&path))?;
    assert_eq!(cfg.timing.frame_interval_ms, 8);
    assert_eq!(cfg.timing.default_wait_ms, 100, "unset keys keep their defaults");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");

    let err = load_config::<ElementalConfig>(Some(&missing)).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn mistyped_values_fail_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[timing]\nframe_interval_ms = \"fast\"\n")?;

    let err = load_config::<ElementalConfig>(Some(&path)).expect_err("string is not a number");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
