//! End-to-end tests: config loading -> writer session -> file on disk

use assert_fs::prelude::*;
use mdout_fs::{ConfigStore, SinkOptions, WriteMode};
use mdout_text::{FormatOption, StyleOption};
use mdout_writer::{DocumentWriter, Error};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;

/// A document described in config: sink options plus the lines to emit.
#[derive(Debug, Deserialize)]
struct DocumentPlan {
    #[serde(default)]
    sink: SinkOptions,
    lines: Vec<PlannedLine>,
}

#[derive(Debug, Deserialize)]
struct PlannedLine {
    text: String,
    #[serde(default)]
    style: StyleOption,
    #[serde(default)]
    format: FormatOption,
}

#[test]
fn test_document_from_yaml_plan() {
    let temp = assert_fs::TempDir::new().unwrap();
    let plan_file = temp.child("plan.yaml");
    plan_file
        .write_str(
            r#"
sink:
  mode: truncate
lines:
  - text: Changelog
    format: heading1
  - text: Breaking
    style: bold
    format: heading2
  - text: Renamed the config key
    format: unordered-list-item
  - text: plain closing paragraph
"#,
        )
        .unwrap();

    let plan: DocumentPlan = ConfigStore::new().load(plan_file.path()).unwrap();
    let output = temp.child("out").child("CHANGELOG.md");

    let mut doc = DocumentWriter::open_with(output.path(), &plan.sink).unwrap();
    for line in &plan.lines {
        doc.write_line(&line.text, line.style, line.format).unwrap();
    }
    doc.release().unwrap();

    output.assert(predicate::path::is_file());
    assert_eq!(
        fs::read_to_string(output.path()).unwrap(),
        "# Changelog\r\n\r\n## **Breaking**\r\n\r\n- Renamed the config key\r\n\r\nplain closing paragraph\r\n\r\n"
    );
}

#[test]
fn test_unknown_style_in_plan_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    let plan_file = temp.child("plan.json");
    plan_file
        .write_str(r#"{"lines": [{"text": "x", "style": "underline"}]}"#)
        .unwrap();

    let result: mdout_fs::Result<DocumentPlan> = ConfigStore::new().load(plan_file.path());

    assert!(matches!(result, Err(mdout_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_append_session_extends_document() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("notes.md");
    output.write_str("# Notes\r\n\r\n").unwrap();

    let options_file = temp.child("sink.toml");
    options_file.write_str("mode = \"append\"\n").unwrap();
    let options: SinkOptions = ConfigStore::new().load(options_file.path()).unwrap();
    assert_eq!(options.mode, WriteMode::Append);

    let mut doc = DocumentWriter::open_with(output.path(), &options).unwrap();
    doc.write_ordered_list_item("first", 1, 0, StyleOption::None)
        .unwrap();
    doc.write_ordered_list_item("nested", 1, 1, StyleOption::Italic)
        .unwrap();
    doc.write_ordered_list_item("second", 2, 0, StyleOption::None)
        .unwrap();
    doc.release().unwrap();

    output.assert(
        "# Notes\r\n\r\n1. first\r\n\r\n     1. *nested*\r\n\r\n2. second\r\n\r\n",
    );
}

#[test]
fn test_released_session_leaves_file_untouched() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("doc.md");

    let mut doc = DocumentWriter::create(output.path()).unwrap();
    doc.write_line("only line", StyleOption::None, FormatOption::None)
        .unwrap();
    doc.release().unwrap();

    let late = doc.write_line("late", StyleOption::None, FormatOption::None);
    assert!(matches!(late, Err(Error::ResourceReleased)));

    output.assert(predicate::str::contains("late").not());
    output.assert("only line\r\n\r\n");
}

#[test]
fn test_normalized_output_has_only_crlf() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("doc.md");

    let mut doc = DocumentWriter::create(output.path()).unwrap();
    doc.write_line("a\nb\r\nc\td", StyleOption::None, FormatOption::None)
        .unwrap();
    doc.write_line_single("e", StyleOption::None, FormatOption::None)
        .unwrap();
    doc.release().unwrap();

    let content = fs::read_to_string(output.path()).unwrap();
    assert!(!content.contains('\t'));
    assert_eq!(content.matches('\n').count(), content.matches("\r\n").count());
    assert_eq!(content, "a\r\nb\r\nc    d\r\n\r\ne\r\n  ");
}
