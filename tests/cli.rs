// ABOUTME: Integration tests for the crxdeploy CLI commands.
// ABOUTME: Validates --help output, init, skipped deploys, status, and clean.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn crxdeploy_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("crxdeploy"))
}

fn write_config(dir: &std::path::Path, extra: &str) {
    let yaml = format!(
        "server: http://127.0.0.1:9/crx\nlogin: admin\npassword: admin\npackage: app.zip\n{extra}"
    );
    fs::write(dir.join("crxdeploy.yml"), yaml).unwrap();
}

#[test]
fn help_shows_commands() {
    crxdeploy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("crxdeploy.yml");

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "crxdeploy.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("server: http://localhost:4502/crx"));
    assert!(content.contains("package:"));
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("crxdeploy.yml");

    fs::write(&config_path, "existing: config").unwrap();

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn skipped_deploy_succeeds_without_server() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), "skip: true\n");

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn deploy_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: configuration file not found"));
}

#[test]
fn deploy_with_missing_package_fails_with_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), "");

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("app.zip does not exist"));
}

#[test]
fn status_shows_resolved_install_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), "delete_paths: /apps/a;/apps/b\n");

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("/etc/packages/app.zip"))
        .stdout(predicate::str::contains("/apps/a;/apps/b"));
}

#[test]
fn json_status_emits_json_lines() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), "");

    crxdeploy_cmd()
        .current_dir(temp_dir.path())
        .args(["--json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"event":"server","message":"http://127.0.0.1:9/crx"}"#));
}

#[test]
fn clean_removes_vlt_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("jcr_root/apps");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join(".vlt"), "").unwrap();
    fs::write(nested.join(".content.xml"), "").unwrap();

    crxdeploy_cmd()
        .arg("clean")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 .vlt file(s)"));

    assert!(!nested.join(".vlt").exists());
    assert!(nested.join(".content.xml").exists());
}
