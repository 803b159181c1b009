//! Extraction over a realistic chat export fixture

use msgcloud::extractor::{extract_file, parse_chat_log, ExtractQuery, ParseOptions};
use msgcloud::{extract, ChatNode};

use crate::helpers::{fixtures_dir, load_fixture};

fn run(query: &ExtractQuery) -> Vec<String> {
    let path = fixtures_dir().join("messages.htm");
    extract_file(&path, query, &ParseOptions::default())
        .expect("fixture should parse")
        .messages
}

// ============================================================================
// Target Only
// ============================================================================

#[test]
fn target_messages_in_document_order() {
    let messages = run(&ExtractQuery::new("Alice Smith"));
    assert_eq!(messages, vec!["hi", "bye", "", "yes"]);
}

#[test]
fn group_thread_messages_are_never_extracted() {
    let messages = run(&ExtractQuery::new("Alice Smith"));
    assert!(!messages.iter().any(|m| m == "group hello"));
}

#[test]
fn person_only_in_group_thread_has_no_messages() {
    assert!(run(&ExtractQuery::new("Dave Brown")).is_empty());
}

#[test]
fn unknown_person_has_no_messages() {
    assert!(run(&ExtractQuery::new("Nobody")).is_empty());
}

// ============================================================================
// Target With Owner
// ============================================================================

#[test]
fn owner_messages_follow_the_target() {
    let query = ExtractQuery::new("Alice Smith").with_owner("Bob Jones");
    let messages = run(&query);
    assert_eq!(messages, vec!["hi", "hey", "bye", "", "yes", "cool"]);
}

#[test]
fn owner_messages_in_threads_without_target_are_dropped() {
    let query = ExtractQuery::new("Alice Smith").with_owner("Bob Jones");
    let messages = run(&query);
    assert!(!messages.iter().any(|m| m == "sure"));
    assert!(!messages.iter().any(|m| m == "you there?"));
}

#[test]
fn other_pair_in_same_export() {
    let query = ExtractQuery::new("Carol White").with_owner("Bob Jones");
    assert_eq!(run(&query), vec!["lunch?", "sure"]);
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn stats_reflect_export() {
    let path = fixtures_dir().join("messages.htm");
    let extraction =
        extract_file(&path, &ExtractQuery::new("Alice Smith"), &ParseOptions::default()).unwrap();

    assert_eq!(extraction.stats.threads, 4);
    assert_eq!(extraction.stats.group_threads, 1);
    assert_eq!(extraction.stats.messages_seen, 12);
    assert_eq!(extraction.non_empty().count(), 3);
}

// ============================================================================
// Parse Boundary
// ============================================================================

#[test]
fn fixture_flattens_to_typed_nodes() {
    let nodes = parse_chat_log(&load_fixture("messages.htm"), &ParseOptions::default()).unwrap();

    assert_eq!(nodes[0], ChatNode::thread("Alice Smith, Bob Jones"));
    assert_eq!(nodes[1], ChatNode::speaker("Alice Smith"));
    assert_eq!(nodes[2], ChatNode::message("hi"));
    assert_eq!(
        nodes.iter().filter(|n| matches!(n, ChatNode::Thread { .. })).count(),
        4
    );
}

#[test]
fn extraction_from_parsed_nodes_matches_file_extraction() {
    let nodes = parse_chat_log(&load_fixture("messages.htm"), &ParseOptions::default()).unwrap();
    let query = ExtractQuery::new("Alice Smith").with_owner("Bob Jones");

    assert_eq!(extract(&nodes, &query).messages, run(&query));
}
