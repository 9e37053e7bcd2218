use chirp::config::{Config, ConfigError, ConfigStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("failed to write config");
    (temp_dir, path)
}

#[test]
fn full_config_round_trips() {
    let (_dir, path) = write_config(
        r#"[user]
name = "Ada"
username = "ada"
bio = "counting machines"

[ui]
tick_rate_ms = 100
char_budget = 140
loading_ticks = 1
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.user.name, "Ada");
    assert_eq!(config.user.username, "ada");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.char_budget, 140);
    assert_eq!(config.ui.loading_ticks, 1);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let (_dir, path) = write_config(
        r#"[user]
username = "justme"
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.user.username, "justme");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.char_budget, 280);
}

#[test]
fn unreadable_file_is_a_read_error() {
    let err = Config::load_from(&PathBuf::from("/nonexistent/chirp.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("not toml [");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn empty_username_fails_validation() {
    let (_dir, path) = write_config(
        r#"[user]
username = "  "
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn zero_char_budget_fails_validation() {
    let (_dir, path) = write_config(
        r#"[ui]
char_budget = 0
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { .. }));
}

#[test]
fn store_reload_replaces_contents() {
    let (_dir, path) = write_config(
        r#"[user]
username = "before"
"#,
    );
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(store.get().user.username, "before");

    fs::write(
        &path,
        r#"[user]
username = "after"
"#,
    )
    .unwrap();
    store.reload().expect("reload should succeed");
    assert_eq!(store.get().user.username, "after");
}

#[test]
fn failed_reload_keeps_the_old_config() {
    let (_dir, path) = write_config(
        r#"[user]
username = "survivor"
"#,
    );
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());

    fs::write(&path, "broken [").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().user.username, "survivor");
}
