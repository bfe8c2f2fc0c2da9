//! Shared helpers for integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Absolute path of a fixture as a string argument.
pub fn fixture_arg(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().to_string()
}

/// Copy a fixture into a fresh temp dir.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// typecast binary isolated from the user's config.
pub fn typecast(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typecast").expect("binary should build");
    cmd.env("TYPECAST_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("TYPECAST_LOG");
    cmd
}
