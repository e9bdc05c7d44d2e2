/// Binary-level tests: argument handling, stream separation, exit codes.
///
/// Each test spawns the real `latest` executable against a temporary
/// directory, so glob expansion, MIME sniffing, and the exit status all go
/// through the same path a shell user would hit.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn latest() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_latest"));
    cmd.env_remove("LATEST_LOG");
    cmd
}

fn write_at(dir: &Path, name: &str, secs: u64) {
    let path = dir.join(name);
    fs::write(&path, name).unwrap();
    let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_650_000_000 + secs);
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(t)
        .unwrap();
}

/// a.pdf (t1) < b.pdf (t2) < c.pdf (t3)
fn pdf_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_at(tmp.path(), "a.pdf", 10);
    write_at(tmp.path(), "b.pdf", 20);
    write_at(tmp.path(), "c.pdf", 30);
    tmp
}

fn arg(dir: &Path, tail: &str) -> String {
    dir.join(tail).to_string_lossy().into_owned()
}

// ── Selection ────────────────────────────────────────────────────────────────

#[test]
fn newest_two_pdfs() {
    let tmp = pdf_tree();
    let expected = format!(
        "{}\n{}\n",
        tmp.path().join("c.pdf").display(),
        tmp.path().join("b.pdf").display()
    );

    latest()
        .args(["--newest", "2", arg(tmp.path(), "*.pdf").as_str()])
        .assert()
        .success()
        .stdout(expected);
}

/// Relative patterns still print absolute paths.
#[test]
fn relative_pattern_prints_absolute_paths() {
    let tmp = pdf_tree();
    let cwd = fs::canonicalize(tmp.path()).unwrap();

    latest()
        .current_dir(&cwd)
        .args(["-o", "1", "*.pdf"])
        .assert()
        .success()
        .stdout(format!("{}\n", cwd.join("a.pdf").display()));
}

#[test]
fn kind_xls_selects_only_spreadsheet() {
    let tmp = TempDir::new().unwrap();
    write_at(tmp.path(), "report.xlsx", 1);
    write_at(tmp.path(), "notes.txt", 2);

    latest()
        .args(["-n", "5", "--kind", "xls", arg(tmp.path(), "*").as_str()])
        .assert()
        .success()
        .stdout(format!("{}\n", tmp.path().join("report.xlsx").display()));
}

// ── Empty results ────────────────────────────────────────────────────────────

#[test]
fn no_matches_exits_nonzero_with_empty_stdout() {
    let tmp = TempDir::new().unwrap();

    latest()
        .arg(arg(tmp.path(), "*.pdf"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn no_matches_with_allow_empty_succeeds() {
    let tmp = TempDir::new().unwrap();

    latest()
        .args(["-0", arg(tmp.path(), "*.pdf").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn quiet_keeps_stderr_empty() {
    let tmp = TempDir::new().unwrap();

    latest()
        .args(["--quiet", arg(tmp.path(), "*.pdf").as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

// ── Argument errors ──────────────────────────────────────────────────────────

#[test]
fn newest_and_oldest_together_is_rejected() {
    let tmp = pdf_tree();

    latest()
        .args(["-n", "1", "-o", "1", arg(tmp.path(), "*.pdf").as_str()])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn zero_count_is_rejected() {
    let tmp = pdf_tree();

    latest()
        .args(["--newest", "0", arg(tmp.path(), "*.pdf").as_str()])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn version_prints_and_exits_zero() {
    latest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("latest "));
}
