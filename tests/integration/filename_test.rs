//! Tests for output filename generation.

use std::path::Path;

use msgcloud::files::filename::{self, FilenameError};

// ============================================================================
// Message Files
// ============================================================================

#[test]
fn messages_filename_strips_spaces() {
    assert_eq!(
        filename::messages_filename("Alice Smith", None).unwrap(),
        "AliceSmith.txt"
    );
}

#[test]
fn messages_filename_appends_owner() {
    assert_eq!(
        filename::messages_filename("Alice Smith", Some("Bob Jones")).unwrap(),
        "AliceSmith_BobJones.txt"
    );
}

#[test]
fn messages_filename_strips_tabs_and_newlines() {
    assert_eq!(
        filename::messages_filename("Alice\tSmith\n", None).unwrap(),
        "AliceSmith.txt"
    );
}

#[test]
fn messages_filename_removes_path_separators() {
    assert_eq!(
        filename::messages_filename("../Alice/Smith", None).unwrap(),
        "..AliceSmith.txt"
    );
}

#[test]
fn messages_filename_blank_person_falls_back() {
    assert_eq!(filename::messages_filename("   ", None).unwrap(), "messages.txt");
}

#[test]
fn messages_filename_blank_owner_is_ignored() {
    assert_eq!(
        filename::messages_filename("Alice", Some(" ")).unwrap(),
        "Alice.txt"
    );
}

#[test]
fn messages_filename_rejects_overlong_names() {
    let result = filename::messages_filename(&"x".repeat(260), None);
    assert_eq!(
        result,
        Err(FilenameError::TooLong {
            length: 264,
            max: 255
        })
    );
}

// ============================================================================
// Cloud Files
// ============================================================================

#[test]
fn cloud_filename_uses_input_stem() {
    assert_eq!(
        filename::cloud_filename(Path::new("output/AliceSmith.txt")),
        "AliceSmith.svg"
    );
}

#[test]
fn cloud_filename_stops_at_first_dot() {
    assert_eq!(
        filename::cloud_filename(Path::new("notes.2015.txt")),
        "notes.svg"
    );
}

#[test]
fn cloud_filename_without_extension() {
    assert_eq!(filename::cloud_filename(Path::new("/tmp/chat")), "chat.svg");
}

#[test]
fn cloud_filename_hidden_file_falls_back() {
    assert_eq!(filename::cloud_filename(Path::new(".hidden")), "cloud.svg");
}

// ============================================================================
// Length Validation
// ============================================================================

#[test]
fn validate_length_accepts_255() {
    assert!(filename::validate_length(&"a".repeat(255)).is_ok());
}

#[test]
fn validate_length_rejects_256() {
    assert!(filename::validate_length(&"a".repeat(256)).is_err());
}
