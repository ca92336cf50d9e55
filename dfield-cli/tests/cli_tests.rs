//! Integration tests for the dfield CLI.
//!
//! These tests invoke the `dfield` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn dfield() -> Command {
    Command::cargo_bin("dfield").unwrap()
}

/// Helper: compile a formula, returning the path to the .dfb output.
fn compile_to_temp(dir: &TempDir, formula: &str) -> PathBuf {
    let output = dir.path().join("test.dfb");
    dfield()
        .args(["compile", formula, "-o", output.to_str().unwrap()])
        .assert()
        .success();
    output
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    dfield()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: dfield"));
}

#[test]
fn help_flag_exits_0() {
    dfield()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    dfield()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- Compile ----

#[test]
fn compile_writes_word_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sum.dfb");

    dfield()
        .args(["compile", "3>4+", "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("compiled 5 instructions"));

    // LIT 3, SEEK_RIGHT, LIT 4, ADD, RET: seven words of eight bytes.
    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes.len(), 56);
}

#[test]
fn compile_default_output_name() {
    let dir = TempDir::new().unwrap();

    dfield()
        .current_dir(dir.path())
        .args(["compile", "y"])
        .assert()
        .success();

    assert!(dir.path().join("formula.dfb").exists());
}

#[test]
fn compile_error_exits_1_with_offset() {
    dfield()
        .args(["compile", "y>T"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("offset 3"));
}

#[test]
fn compile_without_formula_exits_1() {
    dfield()
        .arg("compile")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a formula"));
}

// ---- Eval ----

#[test]
fn eval_sum() {
    dfield()
        .args(["eval", "3>4+"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn eval_default_formula_with_bindings() {
    dfield()
        .args(["eval", "y=3", "t=1"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn eval_function_call_is_a_formula() {
    dfield()
        .args(["eval", "t=sin", "t=0"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn eval_division_by_zero_exits_3() {
    dfield()
        .args(["eval", "y=1", "t=1"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("evaluation error"));
}

#[test]
fn eval_underflow_exits_3() {
    dfield()
        .args(["eval", "34+"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("underflow"));
}

#[test]
fn eval_unbound_is_lenient_by_default() {
    dfield()
        .args(["eval", "5>x+"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn eval_strict_rejects_unbound() {
    dfield()
        .args(["eval", "5>x+", "--strict"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("'x'"));
}

#[test]
fn eval_two_formulas_exits_1() {
    dfield()
        .args(["eval", "1", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unexpected argument"));
}

// ---- Run ----

#[test]
fn run_compiled_file() {
    let dir = TempDir::new().unwrap();
    let path = compile_to_temp(&dir, "y>t+>y>t-[/");

    dfield()
        .args(["run", path.to_str().unwrap(), "y=5", "t=3"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn run_unverifiable_file_exits_2() {
    let dir = TempDir::new().unwrap();
    let path = compile_to_temp(&dir, "<1");

    dfield()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("underflow"));
}

#[test]
fn run_truncated_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.dfb");
    fs::write(&path, [1u8, 2, 3]).unwrap();

    dfield()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("decode failed"));
}

#[test]
fn run_missing_file_exits_1() {
    dfield()
        .args(["run", "/nonexistent/path.dfb"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_without_file_exits_1() {
    dfield()
        .arg("run")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires an input file"));
}

// ---- Verify ----

#[test]
fn verify_reports_window_and_variables() {
    dfield()
        .args(["verify", "y>t+>y>t-[/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max head 3"))
        .stdout(predicate::str::contains("variables: t, y"));
}

#[test]
fn verify_constant_formula_has_no_variables() {
    dfield()
        .args(["verify", "_p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("variables: none"));
}

#[test]
fn verify_rejects_left_edge_operator() {
    dfield()
        .args(["verify", "34+"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("without left operand"));
}

// ---- List ----

#[test]
fn list_prints_offsets_and_mnemonics() {
    dfield()
        .args(["list", "3>4+"])
        .assert()
        .success()
        .stdout("0000  LIT 3\n0002  SEEK_RIGHT\n0003  LIT 4\n0005  ADD\n0006  RET\n");
}

#[test]
fn list_invalid_formula_exits_1() {
    dfield()
        .args(["list", "=foo"])
        .assert()
        .failure()
        .code(1);
}
