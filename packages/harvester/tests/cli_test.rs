//! Tests for the `xzufi-harvester` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("xzufi")
        .join(name)
}

fn harvester() -> Command {
    Command::cargo_bin("xzufi-harvester").unwrap()
}

#[test]
fn test_extract_to_stdout() {
    harvester()
        .arg("extract")
        .arg(fixture_path("full_message.xml"))
        .assert()
        .success()
        .stdout(
            "https://example.org/wohngeld/a\n\
             https://example.org/wohngeld/b\n\
             https://example.org/wohngeld/c\n\
             https://example.org/melde\n",
        );
}

#[test]
fn test_extract_appends_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("links.txt");
    fs::write(&output, "https://existing\n").unwrap();

    harvester()
        .arg("extract")
        .arg(fixture_path("short_version.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("https://existing\nhttps://example.org/wohngeld/a\n"));
    assert_eq!(content.lines().count(), 5);
}

#[test]
fn test_extract_unknown_element_fails() {
    harvester()
        .arg("extract")
        .arg(fixture_path("unknown_record.xml"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown_record.xml"))
        .stderr(predicate::str::contains("formular"));
}

#[test]
fn test_harvest_reports_failures() {
    let root = tempfile::tempdir().unwrap();
    let source = root.path().join("amt24");
    fs::create_dir_all(&source).unwrap();
    fs::copy(fixture_path("full_message.xml"), source.join("a.xml")).unwrap();
    fs::copy(fixture_path("bad_link_type.xml"), source.join("b.xml")).unwrap();
    fs::write(source.join("index.txt"), "a.xml\nb.xml\n").unwrap();
    let output = root.path().join("onlineservicelinks.txt");

    harvester()
        .arg("harvest")
        .arg(root.path())
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 documents"));

    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 4);
}

#[test]
fn test_inspect_prints_records() {
    harvester()
        .arg("inspect")
        .arg(fixture_path("full_message.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("99050012104000"))
        .stdout(predicate::str::contains("Wohngeldstelle Musterstadt"));
}
