//! Integration tests for the typecast CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture_arg, temp_fixture, typecast};

const FAST: &[&str] = &[
    "--start-delay",
    "0",
    "--char-delay",
    "10",
    "--progress-delay",
    "50",
];

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("timeline"));
}

#[test]
fn version_includes_package_version() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_generate_script() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typecast"));
}

// ============================================================================
// Timeline
// ============================================================================

#[test]
fn timeline_lists_every_step() {
    let config = TempDir::new().unwrap();
    let output = typecast(&config)
        .arg("timeline")
        .arg(fixture_arg("demo.toml"))
        .args(FAST)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = [
        "     0ms  t1  scheduled",
        "     0ms  t1  cursor",
        "     0ms  t1  line 0 start (input)",
        "    10ms  t1  line 0 glyph \"l\"",
        "    20ms  t1  line 0 glyph \"s\"",
        "    30ms  t1  line 0 done",
        "    30ms  t1  line 1 start (progress)",
        "    30ms  t1  line 1 placeholder",
        "    80ms  t1  line 1 done",
        "    80ms  t1  line 2 start (literal)",
        "    80ms  t1  line 2 done",
        "    80ms  t1  finished",
    ];
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn timeline_uses_config_file_timing() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("config.toml"),
        "[animator]\nstart_delay_ms = 5\nchar_delay_ms = 1\n",
    )
    .unwrap();

    typecast(&config)
        .arg("timeline")
        .arg(fixture_arg("demo.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("     6ms  t1  line 0 glyph \"l\""))
        .stdout(predicate::str::contains("  2008ms  t1  finished"));
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn render_finished_page() {
    let config = TempDir::new().unwrap();
    let output = typecast(&config)
        .arg("render")
        .arg(fixture_arg("demo.toml"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    [bash]
    $ ls
    [Processing...]
    a.txt
    █
    ");
}

#[test]
fn render_mid_typing() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("render")
        .arg(fixture_arg("demo.toml"))
        .args(["--at", "675"])
        .assert()
        .success()
        .stdout("[bash]\n$ l\n█\n");
}

#[test]
fn render_before_start_delay_shows_nothing() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("render")
        .arg(fixture_arg("demo.toml"))
        .args(["--at", "599"])
        .assert()
        .success()
        .stdout("[bash]\n");
}

#[test]
fn render_json_page_with_multibyte_text() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("render")
        .arg(fixture_arg("multi.json"))
        .assert()
        .success()
        .stdout("[left]\n$ echo héllo 👋\nhéllo 👋\n█\n\n█\n");
}

// ============================================================================
// Play (plain mode, stdout is not a TTY here)
// ============================================================================

#[test]
fn play_streams_plain_text_when_piped() {
    let config = TempDir::new().unwrap();
    let (_dir, page) = temp_fixture("demo.toml");
    typecast(&config)
        .arg("play")
        .arg(&page)
        .args(["--start-delay", "0", "--char-delay", "1", "--progress-delay", "1"])
        .assert()
        .success()
        .stdout("$ ls\n[Processing...]\na.txt\n");
}

#[test]
fn play_speed_multiplier_is_accepted() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("play")
        .arg(fixture_arg("demo.toml"))
        .args(["--plain", "--speed", "16", "--start-delay", "0"])
        .args(["--progress-delay", "100"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("a.txt\n"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn missing_page_fails_with_path() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .args(["render", "does-not-exist.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read page"))
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

#[test]
fn broken_page_reports_invalid_file() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("timeline")
        .arg(fixture_arg("broken.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid page file"));
}

#[test]
fn render_without_page_is_usage_error() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("render")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<PAGE>"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[animator]"))
        .stdout(predicate::str::contains("char_delay_ms = 75"))
        .stdout(predicate::str::contains("[player]"));
}

#[test]
fn config_path_honors_env() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn invalid_config_is_reported() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.toml"), "[animator\n").unwrap();
    typecast(&config)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn config_init_writes_defaults_once() {
    let config = TempDir::new().unwrap();
    let path = config.path().join("config.toml");

    typecast(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("char_delay_ms = 75"));
    assert!(written.contains("prompt = \"$ \""));

    std::fs::write(&path, "[animator]\nchar_delay_ms = 5\n").unwrap();
    typecast(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[animator]\nchar_delay_ms = 5\n"
    );
}

#[test]
fn nan_speed_flag_is_rejected() {
    let config = TempDir::new().unwrap();
    typecast(&config)
        .arg("play")
        .arg(fixture_arg("demo.toml"))
        .args(["--plain", "--speed", "nan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("speed must be a positive number"));
}

#[test]
fn nan_speed_in_config_is_rejected() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.toml"), "[player]\nspeed = nan\n").unwrap();
    typecast(&config)
        .arg("play")
        .arg(fixture_arg("demo.toml"))
        .arg("--plain")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}
