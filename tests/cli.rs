use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn jsdoc() -> Command {
    Command::cargo_bin("jsdoc-rs").expect("binary should build")
}

#[test]
fn test_block_command_prints_commented_source() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("greet.js");
    fs::write(&input, "\nfunction greet(name) {\n  return name;\n}\n").unwrap();

    jsdoc()
        .args(["block", input.to_str().unwrap(), "--row", "0", "--show-selection"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/**\n * greet - description\n *\n * @param  {type} name description\n * @return {type} description\n */\nfunction greet(name) {",
        ))
        .stderr(predicate::str::contains("\"description\""));
}

#[test]
fn test_block_command_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("value.js");
    let output = dir.path().join("out.js");
    fs::write(&input, "const x = 1;").unwrap();

    jsdoc()
        .args(["block", input.to_str().unwrap(), "-r", "0", "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, "const x = 1;\n/**\n * description\n */\n");
}

#[test]
fn test_block_command_keeps_crlf_line_endings() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("windows.js");
    let output = dir.path().join("out.js");
    fs::write(&input, "\r\nfunction g(x) {\r\n}\r\n").unwrap();

    jsdoc()
        .args(["block", input.to_str().unwrap(), "-r", "0", "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "\r\n/**\r\n * g - description\r\n *\r\n * @param  {type} x description\r\n * @return {type} description\r\n */\r\nfunction g(x) {\r\n}\r\n"
    );
    assert_eq!(written.matches('\n').count(), written.matches("\r\n").count());
}

#[test]
fn test_block_command_rejects_position_outside_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.js");
    fs::write(&input, "a;").unwrap();

    jsdoc()
        .args(["block", input.to_str().unwrap(), "--row", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the buffer"));
}

#[test]
fn test_newline_command_continues_block() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.js");
    fs::write(&input, "/**\n   * some comment text\n */").unwrap();

    jsdoc()
        .args(["newline", input.to_str().unwrap(), "--row", "1", "--column", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   * some comment text\n   * \n */"));
}

#[test]
fn test_synthesize_json_output() {
    jsdoc()
        .args(["synthesize", "--next", "function add(a, b) {", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"variant\": \"FUNCTION\""))
        .stdout(predicate::str::contains("@param  {type} b description"));
}

#[test]
fn test_synthesize_with_style_file() {
    let dir = TempDir::new().unwrap();
    let style = dir.path().join("style.json");
    fs::write(&style, r#"{ "description_placeholder": "TODO" }"#).unwrap();

    jsdoc()
        .args(["synthesize", "--anchor", "let a;", "--style", style.to_str().unwrap()])
        .assert()
        .success()
        .stdout("BLOCK\n/**\n * TODO\n */\n");
}

#[test]
fn test_invalid_style_file_fails() {
    let dir = TempDir::new().unwrap();
    let style = dir.path().join("style.json");
    fs::write(&style, r#"{ "block_open": "" }"#).unwrap();

    jsdoc()
        .args(["style", "--style", style.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("block_open"));
}

#[test]
fn test_classify_command() {
    jsdoc()
        .args(["classify", "   * gutter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BLOCK_MIDDLE"))
        .stdout(predicate::str::contains("indentation: \"   \""));
}

#[test]
fn test_classify_command_json() {
    let output = jsdoc()
        .args(["classify", "--format", "json", "  const add = (a, b) => a + b;"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["continuation"], "NONE");
    assert_eq!(report["indentation"], "  ");
    assert_eq!(report["function"]["name"], "add");
    assert_eq!(report["function"]["params"], serde_json::json!(["a", "b"]));
}
