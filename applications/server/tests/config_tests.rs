/// Configuration loading tests
/// Tests layering of default and per-environment config files
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use usuarios_server::{Environment, ServerConfig};

/// Test an empty config directory yields the built-in defaults
#[test]
fn test_missing_files_use_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = ServerConfig::load_from(temp_dir.path(), Environment::Development).unwrap();

    assert_eq!(config.nombre, "Usuarios");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.public_dir, PathBuf::from("public"));
    assert_eq!(config.config_db.host, "localhost");
    assert_eq!(config.environment, Environment::Development);
}

/// Test the environment file overrides the default file
#[test]
fn test_environment_file_overrides_default() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("default.toml"),
        r#"
nombre = "Directorio"

[server]
port = 4000

[config_db]
host = "db.local"
"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("production.toml"),
        r#"
nombre = "Directorio (prod)"

[config_db]
host = "db.prod"
"#,
    )
    .unwrap();

    let dev = ServerConfig::load_from(temp_dir.path(), Environment::Development).unwrap();
    assert_eq!(dev.nombre, "Directorio");
    assert_eq!(dev.config_db.host, "db.local");
    assert_eq!(dev.server.port, 4000);

    let prod = ServerConfig::load_from(temp_dir.path(), Environment::Production).unwrap();
    assert_eq!(prod.nombre, "Directorio (prod)");
    assert_eq!(prod.config_db.host, "db.prod");
    assert_eq!(prod.server.port, 4000);
    assert_eq!(prod.environment, Environment::Production);
    assert!(!prod.environment.is_development());
}

/// Test malformed files surface as configuration errors
#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("default.toml"), "[server\nport = ").unwrap();

    assert!(ServerConfig::load_from(temp_dir.path(), Environment::Development).is_err());
}
