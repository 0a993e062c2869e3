use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use versync::utils::testing::{ReleaseFile, TestProjectBuilder};

fn versync() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("versync").unwrap()
}

#[test]
fn test_cli_missing_version_argument() {
    let project = TestProjectBuilder::new("1.0.1").build().unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .assert()
        .code(1)
        .stdout("")
        .stderr("First argument should be version number to be checked.\n");
}

#[test]
fn test_cli_missing_argument_ignores_broken_config() {
    let project = TestProjectBuilder::new("1.0.1").build().unwrap();
    fs::write(project.scripts_dir().join("versync.toml"), "not toml [").unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .assert()
        .code(1)
        .stderr("First argument should be version number to be checked.\n");
}

#[test]
fn test_cli_all_in_sync() {
    let project = TestProjectBuilder::new("1.0.1").build().unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .arg("1.0.1")
        .assert()
        .success()
        .stdout("")
        .stderr(
            "../src/main.rs ... ok\n\
             ../Cargo.toml ... ok\n\
             ./control ... ok\n\
             ../docs/debian_specific/changelog ... ok\n\
             ../docs/man_page/man_page_source.md ... ok\n\
             ../docs/man_page/photodedupe.1 ... ok\n",
        );
}

#[test]
fn test_cli_version_mismatch() {
    let project = TestProjectBuilder::new("1.0.1").build().unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .arg("1.0.2")
        .assert()
        .code(1)
        .stderr("Failed to find correct version number in:../src/main.rs\n");
}

#[test]
fn test_cli_missing_file_with_root_option() {
    let project = TestProjectBuilder::new("1.0.1")
        .without_file(ReleaseFile::CargoManifest)
        .build()
        .unwrap();

    versync()
        .current_dir(project.root())
        .args(["--root", "scripts", "1.0.1"])
        .assert()
        .code(1)
        .stderr("../src/main.rs ... ok\nFailed to find file:../Cargo.toml\n");
}

#[test]
fn test_cli_keep_going_flag() {
    let project = TestProjectBuilder::new("1.0.1")
        .with_file_version(ReleaseFile::Control, "1.0.0")
        .with_file_version(ReleaseFile::ManPage, "1.0.0")
        .build()
        .unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .args(["--keep-going", "1.0.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to find correct version number in:./control\n",
        ))
        .stderr(predicate::str::contains(
            "Failed to find correct version number in:../docs/man_page/photodedupe.1\n",
        ))
        .stderr(predicate::str::contains("../docs/man_page/man_page_source.md ... ok"));
}

#[test]
fn test_cli_keep_going_from_config() {
    let project = TestProjectBuilder::new("1.0.1")
        .without_file(ReleaseFile::MainSource)
        .build()
        .unwrap();
    fs::write(project.scripts_dir().join("versync.toml"), "keep_going = true\n").unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .arg("1.0.1")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Failed to find file:../src/main.rs\n"))
        .stderr(predicate::str::ends_with("../docs/man_page/photodedupe.1 ... ok\n"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let project = TestProjectBuilder::new("1.0.1").build().unwrap();
    fs::write(project.scripts_dir().join("versync.toml"), "keep_going = \"yes\"\n").unwrap();

    versync()
        .current_dir(project.scripts_dir())
        .arg("1.0.1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_cli_json_report() {
    let project = TestProjectBuilder::new("1.0.1")
        .with_file_version(ReleaseFile::Control, "1.0.0")
        .build()
        .unwrap();

    let assert = versync()
        .current_dir(project.scripts_dir())
        .args(["--format", "json", "1.0.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::ends_with(
            "Failed to find correct version number in:./control\n",
        ));

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["expected_version"], "1.0.1");
    assert_eq!(report["entries"].as_array().unwrap().len(), 3);
    assert_eq!(report["entries"][2]["diagnostic"]["kind"], "version_mismatch");
    assert_eq!(
        report["entries"][2]["extraction"]["candidates"],
        serde_json::json!(["1.0.0"])
    );
    assert_eq!(report["skipped"], 3);
}

#[test]
fn test_cli_runs_are_repeatable() {
    let project = TestProjectBuilder::new("1.0.1")
        .without_file(ReleaseFile::ManPageSource)
        .build()
        .unwrap();

    let first = versync()
        .current_dir(project.scripts_dir())
        .arg("1.0.1")
        .output()
        .unwrap();
    let second = versync()
        .current_dir(project.scripts_dir())
        .arg("1.0.1")
        .output()
        .unwrap();

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stderr, second.stderr);
}
