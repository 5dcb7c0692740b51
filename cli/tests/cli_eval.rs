use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_with_config() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("2 + 3 * 4 =")
        .assert()
        .success()
        .stdout(predicate::eq("> 2 + 3 * 4 =\n((2 + 3) × 4) =\n20\n"));
}

#[test]
fn test_lines_share_a_session() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("2 +")
        .arg("3 =")
        .assert()
        .success()
        .stdout(predicate::eq("> 2 +\n2 + ...\n2\n> 3 =\n(2 + 3) =\n5\n"));
}

#[test]
fn test_invalid_command() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("save")
        .assert()
        .failure()
        .stdout(predicate::eq("> save\nUsage: save FILE\n"));
}

#[test]
fn test_invalid_config() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("config_that_doesnt_exist.toml")
        .arg("2 + 2 =")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to read provided config file `config_that_doesnt_exist.toml`",
        ));
}

#[test]
fn test_run_file() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("tests/example.keys")
        .assert()
        .success()
        .stdout(predicate::eq("(√9 + √16) =\n7\n"));
}

#[test]
fn test_run_stdin() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("-")
        .write_stdin("2 + 3\n")
        .assert()
        .success()
        .stdout(predicate::eq("2 + ...\n3\n"));

    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("-")
        .write_stdin("load\n")
        .assert()
        .success()
        .stdout(predicate::eq("Usage: load FILE\n"));
}

#[test]
fn test_run_stdin_without_trailing_newline() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("-")
        .write_stdin("2 + 3\n=")
        .assert()
        .success()
        .stdout(predicate::eq("2 + ...\n3\n(2 + 3) =\n5\n"));
}

#[test]
fn test_run_stdin_invalid_utf8() {
    let mut cmd = Command::cargo_bin("keycalc").unwrap();
    cmd.arg("-c")
        .arg("tests/config_for_tests.toml")
        .arg("-f")
        .arg("-")
        .write_stdin(&b"2 \xff\n1 + 1 =\n"[..])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}
