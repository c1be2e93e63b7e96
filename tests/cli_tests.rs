//! Runs the `dsnstat` binary end to end

use std::fs;
use std::process::Command;

fn dsnstat() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dsnstat"))
}

#[test]
fn test_failed_file_reported_once() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.dsn");
    let good = dir.path().join("good.dsn");
    fs::write(&bad, "(pcb (net \"open))").unwrap();
    fs::write(&good, "(pcb (net a))").unwrap();

    let output = dsnstat().arg(&bad).arg(&good).output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(stderr.matches("bad.dsn").count(), 1, "stderr: {}", stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
    assert_eq!(
        stderr.trim_end(),
        format!(
            "Failed to process {}: Unterminated quoted region starting at line 1",
            bad.display()
        )
    );
    assert_eq!(stdout, "pcb: 1\npcb.net: 1\n");
}

#[test]
fn test_strict_fails_on_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.dsn");
    fs::write(&bad, "(pcb ()())").unwrap();

    let output = dsnstat().arg("--strict").arg(&bad).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_logs_have_no_ansi_codes_when_redirected() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.dsn");
    fs::write(&good, "(pcb)").unwrap();

    let output = dsnstat().arg("-vv").arg(&good).output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains("processed file"), "stderr: {}", stderr);
    assert!(!stderr.contains('\x1b'), "stderr: {:?}", stderr);
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.dsn");
    fs::write(&good, "(pcb (structure (layer top)))").unwrap();

    let output = dsnstat().args(["-f", "json"]).arg(&good).output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 4);
    assert_eq!(value[0]["path"], "pcb");
    assert_eq!(value[0]["count"], 1);
}
