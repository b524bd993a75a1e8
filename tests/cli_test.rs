//! Integration tests for the `card-format` binary
//!
//! Runs the built executable and checks stdout plus the exit code
//! for each subcommand and each error class.

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn card_format(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_card-format"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    {
        let mut pipe = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).unwrap();
        }
    }

    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

#[test]
fn test_card_number_command() {
    let output = card_format(&["card-number", "4111111111111111"], None);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "4111 1111 1111 1111\n");
}

#[test]
fn test_cvv_command_json() {
    let output = card_format(&["--json", "cvv", "12a3"], None);

    assert_eq!(output.status.code(), Some(0));
    let line: serde_json::Value = serde_json::from_str(stdout_of(&output).trim()).unwrap();
    assert_eq!(line, serde_json::json!({ "kind": "cvv", "value": "123" }));
}

#[test]
fn test_stream_formats_each_stdin_line() {
    let output = card_format(&["stream", "--field", "cvv"], Some("12a345\n\n41111\n"));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "1234\n\n4111\n");
}

#[test]
fn test_type_prints_value_after_each_keystroke() {
    let output = card_format(&["type", "--field", "card_number", "41111"], None);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "4\n41\n411\n4111\n4111 1\n");
}

#[test]
fn test_unknown_field_exits_with_2() {
    let output = card_format(&["type", "--field", "zip", "12"], None);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_duplicate_binding_config_exits_with_1() {
    let config = write_config(
        "[[fields]]\nname = \"a\"\nkind = \"cvv\"\n\n[[fields]]\nname = \"a\"\nkind = \"card_number\"\n",
    );
    let path = config.path().to_str().unwrap();

    let output = card_format(&["-c", path, "cvv", "1"], None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_empty_field_list_exits_with_1() {
    let config = write_config("fields = []\n");
    let path = config.path().to_str().unwrap();

    let output = card_format(&["-c", path, "type", "-f", "card_number", "4111"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fields"));
}

#[test]
fn test_missing_config_file_exits_with_3() {
    let output = card_format(&["-c", "/nonexistent/card-format.toml", "cvv", "1"], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_custom_config_binds_renamed_field() {
    let config = write_config("[[fields]]\nname = \"security_code\"\nkind = \"cvv\"\n");
    let path = config.path().to_str().unwrap();

    let output = card_format(&["-c", path, "type", "-f", "security_code", "9x87654"], None);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "9\n9\n98\n987\n9876\n9876\n9876\n");
}
