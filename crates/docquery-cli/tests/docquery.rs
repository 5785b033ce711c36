use std::io::Write;
use std::process::{Command, Stdio};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const PAGE: &str = "<html><body><div class='test'>Hello <b>World</b></div></body></html>";

fn page_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
    file.write_all(PAGE.as_bytes()).unwrap();
    file
}

#[test]
fn inner_text_from_file() {
    let file = page_file();
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.arg(file.path()).args(["-s", ".test", "-i"]);

    cmd.assert().success().stdout("Hello World\n");
}

#[test]
fn markup_from_file() {
    let file = page_file();
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.arg(file.path()).args(["--selector", ".test b"]);

    cmd.assert().success().stdout("<b>World</b>\n");
}

#[test]
fn no_match_prints_empty_line() {
    let file = page_file();
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.arg(file.path()).args(["-s", ".other"]);

    cmd.assert().success().stdout("\n");
}

#[test]
fn stdin_matches_file() {
    let file = page_file();
    let from_file = cargo_bin_cmd!("docquery")
        .arg(file.path())
        .args(["-s", "div", "-i"])
        .output()
        .unwrap();

    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.args(["-", "-s", "div", "-i"]).write_stdin(PAGE);
    cmd.assert()
        .success()
        .stdout(String::from_utf8(from_file.stdout).unwrap());
}

#[test]
fn stdin_is_the_default_document() {
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.args(["-s", "b"]).write_stdin(PAGE);

    cmd.assert().success().stdout("<b>World</b>\n");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.arg(dir.path().join("missing.html"));

    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error: failed to read"));
}

#[test]
fn invalid_selector_fails() {
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.args(["-s", "div["]).write_stdin(PAGE);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: invalid selector 'div['"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let mut cmd = cargo_bin_cmd!("docquery");
    cmd.args(["-s", "b", "-vv"])
        .env_remove("DOCQUERY_LOG")
        .write_stdin(PAGE);

    cmd.assert()
        .success()
        .stdout("<b>World</b>\n")
        .stderr(predicate::str::contains("selection done"));
}

#[test]
fn closed_stdout_is_not_a_crash() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_docquery"))
        .args(["-", "-s", "b"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Reader goes away before anything is written.
    drop(child.stdout.take());
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(PAGE.as_bytes()).unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}
