use gemini_chat::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const BIN: &str = "gemini-chat";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CHAT_SERVER__PORT");
        env::remove_var("CHAT_SESSION__TTL_SECS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("SESSION_TTL_SECS");
        env::remove_var("TIMEOUT_DISABLED");
    }
}

fn yaml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.session.ttl_secs, 1800);
    assert!(!config.resilience.timeout_disabled);
    assert_eq!(config.resilience.body_limit_bytes, 10 * 1024 * 1024);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
        env::set_var("CHAT_SESSION__TTL_SECS", "120");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.session.ttl_secs, 120);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let file = yaml_file(
        r#"
server:
  port: 7070
resilience:
  timeout_disabled: true
    "#,
    );

    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert!(config.resilience.timeout_disabled);
    // Keys the file leaves out keep their defaults.
    assert_eq!(config.server.host, "0.0.0.0");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env_and_file() {
    clear_env_vars();

    let file = yaml_file("server:\n  port: 7070\n");
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config = AppConfig::load_from_args([BIN, "--config", path.as_str(), "--port", "5050"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 5050);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env_vars();

    let file = yaml_file("server:\n  port: 7070\n");
    unsafe {
        env::set_var("CHAT_SERVER__PORT", "9090");
    }

    let path = file.path().to_string_lossy().into_owned();
    let config =
        AppConfig::load_from_args([BIN, "--config", path.as_str()]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "/nonexistent/chat-config.yaml"]);
    assert!(result.is_err());
}

/// Runs a test from inside a scratch directory and restores the previous
/// working directory on drop, even if the test panics.
struct ScratchCwd {
    dir: tempfile::TempDir,
    previous: PathBuf,
}

impl ScratchCwd {
    fn enter() -> Self {
        let previous = env::current_dir().expect("Failed to read current dir");
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        env::set_current_dir(dir.path()).expect("Failed to enter temp dir");
        Self { dir, previous }
    }
}

impl Drop for ScratchCwd {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let scratch = ScratchCwd::enter();
    fs::write(scratch.dir.path().join("config.yaml"), "server:\n  port: 6060\n")
        .expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 6060);
}
