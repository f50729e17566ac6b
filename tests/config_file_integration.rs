//! Integration tests for the line-oriented config file editors.
//!
//! Exercises sequences of edits against real files in a temporary
//! directory, the way the editors are combined when reshaping a
//! setupVars-style config.

use std::fs;

use tempfile::TempDir;

use ftlconf::error::FtlConfError;
use ftlconf::services::config_file::{add_key, remove_key, upsert_key_value};

#[test]
fn edit_sequence_builds_expected_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("setupVars.conf");

    upsert_key_value(&path, "PIHOLE_DNS_1", "9.9.9.9").unwrap();
    upsert_key_value(&path, "QUERY_LOGGING", "true").unwrap();
    add_key(&path, "DNSMASQ_LISTENING").unwrap();
    upsert_key_value(&path, "PIHOLE_DNS_1", "1.1.1.1").unwrap();
    remove_key(&path, "QUERY_LOGGING").unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "PIHOLE_DNS_1=1.1.1.1\nDNSMASQ_LISTENING\n"
    );
}

#[test]
fn repeated_upserts_keep_one_line_per_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("setupVars.conf");

    for value in ["a", "b", "c"] {
        upsert_key_value(&path, "KEY", value).unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "KEY=c\n");
}

#[test]
fn editors_preserve_comments_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("setupVars.conf");
    fs::write(&path, "# managed file\n\nA=1\n").unwrap();

    upsert_key_value(&path, "B", "2").unwrap();
    remove_key(&path, "A").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "# managed file\n\nB=2\n");
}

#[test]
fn remove_then_add_key_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("setupVars.conf");
    fs::write(&path, "FLAG\n").unwrap();

    remove_key(&path, "FLAG").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    add_key(&path, "FLAG").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "FLAG\n");
}

#[test]
fn unwritable_path_propagates_io_error() {
    let dir = TempDir::new().unwrap();
    // A file where a directory is expected makes every component below it
    // unwritable, regardless of the uid the tests run under.
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("setupVars.conf");

    let err = upsert_key_value(&path, "KEY", "value").unwrap_err();
    assert!(matches!(err, FtlConfError::Io(_)));
}
