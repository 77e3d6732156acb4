#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tf_creds_parser::extractor::resource_kind::ResourceKind;
use tf_creds_parser::generator::{self, records::RecordSet};
use tf_creds_parser::parser::document::Node;
use tf_creds_parser::parser::hcl_loader;

pub(crate) fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

pub(crate) fn load_fixture(name: &str) -> Node {
    hcl_loader::load_document(&fixture_path(name)).expect("fixture should parse")
}

pub(crate) fn extract_fixture(name: &str, kind: ResourceKind) -> RecordSet {
    generator::extract_records(&load_fixture(name), kind).expect("fixture should extract")
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}

/// Copy a fixture into a fresh temp dir so the CSV lands next to it.
pub(crate) fn stage_fixture(prefix: &str, name: &str) -> PathBuf {
    let dir = unique_temp_dir(prefix);
    let target = dir.join(name);
    std::fs::copy(fixture_path(name), &target).expect("should copy fixture");
    target
}

pub(crate) fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()));
    reader
        .records()
        .map(|row| {
            row.expect("row should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// CSV text with `\r\n` terminators normalized for snapshots.
pub(crate) fn read_normalized(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
        .replace("\r\n", "\n")
}
