use diskman::config::Config;
use diskman::error::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn parse_complete_config_file() {
    let file = config_file(
        r#"
[browser]
items_per_page = 50
show_hidden = false
confirm_delete = false
color = false
terminal_width = 120
terminal_height = 40

[progress]
enabled = false
tick_interval_ms = 250
join_timeout_ms = 500
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.browser.items_per_page, 50);
    assert!(!config.browser.show_hidden);
    assert!(!config.browser.confirm_delete);
    assert!(!config.browser.color);
    assert_eq!(config.browser.terminal_size(), Some((120, 40)));
    assert!(!config.progress.enabled);
    assert_eq!(config.progress.tick_interval_ms, 250);
    assert_eq!(config.progress.join_timeout_ms, 500);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let file = config_file("[progress]\ntick_interval_ms = 50\n");

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.progress.tick_interval_ms, 50);
    // Default values
    assert_eq!(config.progress.join_timeout_ms, 1000);
    assert_eq!(config.browser.items_per_page, 20);
    assert!(config.browser.show_hidden);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let file = config_file("this is not valid toml [[[");

    let result = Config::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn zero_items_per_page_returns_error() {
    let file = config_file("[browser]\nitems_per_page = 0\n");

    let result = Config::load(Some(file.path()));
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn missing_explicit_file_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/diskman.toml")));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}
