//! End-to-end tests of the msgcloud binary

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, msgcloud, temp_fixture};

// ============================================================================
// parse
// ============================================================================

#[test]
fn parse_writes_target_messages() {
    let (dir, input) = temp_fixture("messages.htm");

    msgcloud(dir.path())
        .args(["parse", "-p", "Alice Smith", "-o", "out", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 messages"))
        .stdout(predicate::str::contains("Skipped 1 group conversation(s)"));

    let written = fs::read_to_string(dir.path().join("out/AliceSmith.txt")).unwrap();
    assert_eq!(written, "hi\nbye\nyes\n");
}

#[test]
fn parse_with_self_includes_owner_replies() {
    let (dir, input) = temp_fixture("messages.htm");

    msgcloud(dir.path())
        .args(["parse", "-p", "Alice Smith", "-s", "Bob Jones", "-o", "out", "-i"])
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(dir.path().join("out/AliceSmith_BobJones.txt")).unwrap();
    assert_eq!(written, "hi\nhey\nbye\nyes\ncool\n");
}

#[test]
fn parse_reads_default_input_location() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("raw")).unwrap();
    fs::copy(
        fixtures_dir().join("messages.htm"),
        dir.path().join("raw/messages.htm"),
    )
    .unwrap();

    msgcloud(dir.path())
        .args(["parse", "--person", "Alice Smith"])
        .assert()
        .success();

    assert!(dir.path().join("output/AliceSmith.txt").exists());
}

#[test]
fn parse_without_matches_exits_with_failure() {
    let (dir, input) = temp_fixture("messages.htm");

    msgcloud(dir.path())
        .args(["parse", "-p", "Dave Brown", "-o", "out", "-i"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No messages found. Exiting."));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn parse_missing_input_reports_path() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path())
        .args(["parse", "-p", "Alice Smith", "-i", "missing.htm"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("missing.htm"));
}

#[test]
fn parse_requires_person() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path()).arg("parse").assert().code(2);
}

// ============================================================================
// render
// ============================================================================

#[test]
fn render_writes_svg_named_after_input() {
    let (dir, input) = temp_fixture("notes.txt");

    msgcloud(dir.path())
        .args(["render", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered"));

    let svg = fs::read_to_string(dir.path().join("renders/notes.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">pizza</text>"));
    assert!(!svg.contains(">the</text>"));
}

#[test]
fn render_honors_output_dir_and_font_size() {
    let (dir, input) = temp_fixture("notes.txt");

    msgcloud(dir.path())
        .args(["render", "-o", "clouds", "-s", "24", "-i"])
        .arg(&input)
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("clouds/notes.svg")).unwrap();
    assert!(svg.contains(r#"font-size="24.0""#));
}

#[test]
fn render_custom_stopwords_replace_defaults() {
    let (dir, input) = temp_fixture("notes.txt");
    let stopwords = dir.path().join("stop.json");
    fs::write(&stopwords, r#"["pizza"]"#).unwrap();

    msgcloud(dir.path())
        .args(["render", "--stopwords"])
        .arg(&stopwords)
        .arg("-i")
        .arg(&input)
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("renders/notes.svg")).unwrap();
    assert!(!svg.contains(">pizza</text>"));
    assert!(svg.contains(">the</text>"));
}

#[test]
fn render_rejects_malformed_stopwords() {
    let (dir, input) = temp_fixture("notes.txt");
    let stopwords = dir.path().join("stop.json");
    fs::write(&stopwords, r#"{"words": 1}"#).unwrap();

    msgcloud(dir.path())
        .args(["render", "--stopwords"])
        .arg(&stopwords)
        .arg("-i")
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid stopword list"));
}

#[test]
fn render_only_stopwords_fails() {
    let (dir, input) = temp_fixture("stopwords_only.txt");

    msgcloud(dir.path())
        .args(["render", "-i"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Nothing to render"));

    assert!(!dir.path().join("renders").exists());
}

#[test]
fn render_fails_when_no_word_fits_canvas() {
    let (dir, input) = temp_fixture("notes.txt");
    let config = dir.path().join("config.toml");
    fs::write(&config, "[render]\nwidth = 5\nheight = 5\n").unwrap();

    msgcloud(dir.path())
        .env("MSGCLOUD_CONFIG", &config)
        .args(["render", "-i"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("fit on a 5x5 canvas"));

    assert!(!dir.path().join("renders").exists());
}

#[test]
fn render_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path())
        .args(["render", "-i", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read nope.txt"));
}

#[test]
fn render_show_needs_terminal() {
    let (dir, input) = temp_fixture("notes.txt");

    msgcloud(dir.path())
        .args(["render", "--show", "-i"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}

// ============================================================================
// config / completions
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[render]"))
        .stdout(predicate::str::contains("max_font_size = 40"));
}

#[test]
fn redirected_stdout_has_no_color_codes() {
    let (dir, input) = temp_fixture("messages.htm");

    let shown = msgcloud(dir.path())
        .env_remove("NO_COLOR")
        .args(["config", "show"])
        .assert()
        .success();
    let shown = String::from_utf8_lossy(&shown.get_output().stdout).into_owned();
    assert!(!shown.contains("\x1b["));
    assert!(shown.starts_with("[parse]"));
    assert!(toml::from_str::<msgcloud::Config>(&shown).is_ok());

    msgcloud(dir.path())
        .env_remove("NO_COLOR")
        .args(["parse", "-p", "Alice Smith", "-o", "out", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not())
        .stdout(predicate::str::contains("AliceSmith.txt"));
}

#[test]
fn config_file_sets_render_defaults() {
    let (dir, input) = temp_fixture("notes.txt");
    let config = dir.path().join("config.toml");
    fs::write(&config, "[render]\noutput_dir = \"art\"\n").unwrap();

    msgcloud(dir.path())
        .env("MSGCLOUD_CONFIG", &config)
        .args(["render", "-i"])
        .arg(&input)
        .assert()
        .success();

    assert!(dir.path().join("art/notes.svg").exists());
}

#[test]
fn config_path_prints_override() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_mention_binary() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("msgcloud"));
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    msgcloud(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("render"));
}
