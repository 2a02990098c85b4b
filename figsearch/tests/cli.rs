use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

fn cmd() -> Command {
    Command::cargo_bin("figsearch").unwrap()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tests/data/bitmaps")
        .join(name)
}

fn search(op: &str, name: &str) -> assert_cmd::assert::Assert {
    cmd().arg(op).arg(fixture(name)).assert()
}

#[test]
fn full_grid() {
    search("hline", "full3.txt").success().stdout("0 0 0 2");
    search("vline", "full3.txt").success().stdout("0 0 2 0");
    search("square", "full3.txt").success().stdout("0 0 2 2");
}

#[test]
fn first_run_wins_ties() {
    search("hline", "row5.txt").success().stdout("0 0 0 1");
}

#[test]
fn all_zero_grid_is_not_found() {
    for op in ["hline", "vline", "square"] {
        search(op, "zeros4.txt")
            .success()
            .stdout("Not found")
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn isolated_cell() {
    search("square", "dot5.txt").success().stdout("2 2 2 2");
}

#[test]
fn diagonal_single_cells() {
    search("square", "diag2.txt").success().stdout("0 0 0 0");
    search("hline", "diag2.txt").success().stdout("0 0 0 0");
    search("vline", "diag2.txt").success().stdout("0 0 0 0");
}

#[test]
fn mixed_figures() {
    search("hline", "cross.txt").success().stdout("1 0 1 4");
    search("vline", "cross.txt").success().stdout("0 2 4 2");
    search("square", "cross.txt").success().stdout("2 4 4 6");
    search("square", "cross.pbm").success().stdout("2 4 4 6");
}

#[test]
fn test_command() {
    search("test", "cross.txt")
        .success()
        .stdout("Valid")
        .stderr(predicate::str::is_empty());
    search("test", "short.txt")
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("Invalid");
    search("test", "badcell.txt").code(1).stderr("Invalid");
    search("test", "does-not-exist.txt").code(1).stderr("Invalid");
}

#[test]
fn invalid_input_for_search() {
    for op in ["hline", "vline", "square"] {
        search(op, "badcell.txt")
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr("Invalid");
    }
}

#[test]
fn help_banner() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Usage: ./figsearch <operation> [...]."))
        .stdout(contains("square    Find the biggest square in the image."));
}

#[test]
fn usage_errors_print_banner() {
    cmd().assert().code(2).stdout(contains("Operations:"));
    cmd().arg("hline").assert().code(2).stdout(contains("Usage:"));
    cmd()
        .args(["circle", "file.txt"])
        .assert()
        .code(2)
        .stdout(contains("Example: ./figsearch --help"));
}

#[test]
fn version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn mask_output() {
    let dir = tempfile::tempdir().unwrap();
    let mask = dir.path().join("square.pbm");
    cmd()
        .arg("square")
        .arg(fixture("cross.txt"))
        .arg("--mask")
        .arg(&mask)
        .assert()
        .success()
        .stdout("2 4 4 6");

    let written = fs::read(&mask).unwrap();
    assert!(written.starts_with(b"P4\n7 6\n"));

    let text_mask = dir.path().join("hline.txt");
    cmd()
        .args(["hline", "--mask"])
        .arg(&text_mask)
        .arg(fixture("cross.txt"))
        .assert()
        .success();
    let expected = fs::read_to_string(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/golden/render_golden.02.txt"),
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&text_mask).unwrap(), expected);
}

#[test]
fn verbose_logs_go_to_stderr() {
    cmd()
        .args(["-vv", "hline"])
        .arg(fixture("cross.txt"))
        .env_remove("FIGSEARCH_LOG")
        .assert()
        .success()
        .stdout("1 0 1 4")
        .stderr(contains("longest run"));
}
