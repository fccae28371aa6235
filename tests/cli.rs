use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use tempfile::TempDir;

fn rpn_calc() -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("rpn-calc")?;
    cmd.arg("--no-color").env_remove("RPN_CALC_DEPTH");
    Ok(cmd)
}

#[test]
fn test_expression_mode() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .arg("-e")
        .arg("3 4 + 2 *")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 14"))
        .stdout(predicate::str::contains("  1: 14"));

    Ok(())
}

#[test]
fn test_failed_token_sets_exit_status() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .args(["-e", "10 0 /"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: division by zero"))
        .stdout(predicate::str::contains("  2: 0"))
        .stderr(predicate::str::contains("1 token(s) failed"));

    Ok(())
}

#[test]
fn test_script_file() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let script = temp_dir.path().join("circle.rpn");
    fs::write(&script, "# area of a circle with radius 2\n2 sq\npi * # r^2 * pi\n")?;

    rpn_calc()?
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 12.56637061"));

    Ok(())
}

#[test]
fn test_expressions_then_files_share_stack() -> Result<(), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let script = temp_dir.path().join("finish.rpn");
    fs::write(&script, "+\n")?;

    rpn_calc()?
        .args(["-e", "40", "-e", "2", "-f"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 42"));

    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .arg("does-not-exist.rpn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.rpn"));

    Ok(())
}

#[test]
fn test_json_output() -> Result<(), Box<dyn Error>> {
    let output = rpn_calc()?.args(["--json", "-e", "2 3 pow"]).output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;

    assert_eq!(records.len(), 4);
    assert_eq!(records[2]["token"], "pow");
    assert_eq!(records[2]["outcome"]["Result"], 8.0);
    assert_eq!(records[3]["stack"], serde_json::json!([8.0]));

    Ok(())
}

#[test]
fn test_depth_flag() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .args(["--depth", "2", "-e", "1 2 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  2: 2\n  3: 3"))
        .stdout(predicate::str::contains("  1: 1").not());

    rpn_calc()?.args(["--depth", "0", "-e", "1"]).assert().failure();
    for depth in ["1001", "4000000000"] {
        rpn_calc()?.args(["--depth", depth, "-e", "1"]).assert().failure();
    }

    Ok(())
}

#[test]
fn test_oversized_env_depth_falls_back() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .env("RPN_CALC_DEPTH", "18446744073709551615")
        .args(["-e", "1 2 3 4 5 6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  2: 2\n  3: 3"))
        .stdout(predicate::str::contains("  1: 1").not());

    Ok(())
}

#[test]
fn test_repl_reads_until_quit() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .write_stdin("5 3 -\nfoo\nquit\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("RPN calculator ready."))
        .stdout(predicate::str::contains("Result: 2"))
        .stdout(predicate::str::contains("Error: unknown token 'foo'"))
        .stdout(predicate::str::contains("Pushed 7").not())
        .stdout(predicate::str::contains("Goodbye!"));

    Ok(())
}

#[test]
fn test_repl_end_of_input() -> Result<(), Box<dyn Error>> {
    rpn_calc()?
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("clear clr"))
        .stdout(predicate::str::contains("Goodbye!"));

    Ok(())
}
