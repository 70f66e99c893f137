// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{codecollect_cmd, create_file};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_error_no_roots() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    codecollect_cmd()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No root paths configured"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_missing_root_keeps_other_roots() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "good/a.py", "print('ok')")?;

    codecollect_cmd()
        .args(["good", "gone", "-D"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--- Dry Run: Output_good.txt ---"))
        .stdout(predicate::str::contains("print('ok')"))
        .stderr(predicate::str::contains("gone"))
        .stderr(predicate::str::contains("is not a directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_file_root_is_not_a_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("file.ts"), "x")?;

    codecollect_cmd()
        .args(["file.ts", "-D"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Dry Run").not())
        .stderr(predicate::str::contains("is not a directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_colliding_output_names() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "one/app/a.ts", "1")?;
    create_file(temp.path(), "two/app/b.ts", "2")?;

    codecollect_cmd()
        .args(["one/app", "two/app", "-D"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Output_app.txt"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_missing_output_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "app/a.ts", "1")?;

    codecollect_cmd()
        .args(["app", "-o", "nowhere", "--editor", "true"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Output directory"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_empty_editor_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "app/a.ts", "1")?;

    codecollect_cmd()
        .args(["app", "--editor", "   "])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Editor command is empty"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_invalid_delay() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    // Rejected by clap before anything runs.
    codecollect_cmd()
        .args([".", "--delete-delay-ms", "soon"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delete-delay-ms"));

    temp.close()?;
    Ok(())
}
