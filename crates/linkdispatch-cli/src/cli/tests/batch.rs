//! Tests for batch.

use super::parse;
use crate::cli::CliCommand;
use linkdispatch_core::LinkSource;
use std::path::Path;

#[test]
fn cli_parse_batch() {
    match parse(&["linkdispatch", "batch", "/tmp/links.txt"]) {
        CliCommand::Batch { path, source, json } => {
            assert_eq!(path, Path::new("/tmp/links.txt"));
            assert_eq!(source, LinkSource::CustomScheme);
            assert!(!json);
        }
        _ => panic!("expected Batch"),
    }
}

#[test]
fn cli_parse_batch_stdin_quick_actions() {
    match parse(&["linkdispatch", "batch", "-", "--source", "quick-action", "--json"]) {
        CliCommand::Batch { path, source, json } => {
            assert_eq!(path, Path::new("-"));
            assert_eq!(source, LinkSource::QuickAction);
            assert!(json);
        }
        _ => panic!("expected Batch from stdin"),
    }
}
