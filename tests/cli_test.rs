// tests/cli_test.rs
mod common;

use common::TestRepo;
use std::process::{Command, Output};

fn run(test_repo: &TestRepo, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nearest-version"))
        .current_dir(test_repo.dir.path())
        .env("XDG_CONFIG_HOME", test_repo.dir.path().join(".git"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_nearest-version"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("nearest-version"));
    assert!(stdout.contains("Find the nearest tagged versions"));
}

#[test]
fn test_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_nearest-version"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("nearest-version "));
}

#[test]
fn test_reports_nearest_versions() {
    let test_repo = TestRepo::new();
    let release = test_repo.commits(2);
    test_repo.tag("v1.9.0", release);
    let rc = test_repo.commits(3);
    test_repo.tag("v2.0.0-rc.1", rc);
    test_repo.commits(1);

    let output = run(&test_repo, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2.0.0-rc.1 (1 commit since)"), "got: {}", stdout);
    assert!(stdout.contains("1.9.0 (4 commits since)"), "got: {}", stdout);
}

#[test]
fn test_bump_uses_nearest_normal_version() {
    let test_repo = TestRepo::new();
    let head = test_repo.commits(1);
    test_repo.tag("v1.2.3", head);

    let output = run(&test_repo, &["--bump", "minor"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1.2.3 (at HEAD)"), "got: {}", stdout);
    assert!(stdout.contains("1.2.3 -> 1.3.0"), "got: {}", stdout);
}

#[test]
fn test_prefix_override() {
    let test_repo = TestRepo::new();
    let head = test_repo.commits(2);
    test_repo.tag("release-4.0.0", head);

    let output = run(&test_repo, &["--prefix", "release-"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("4.0.0 (at HEAD)"), "got: {}", stdout);
}

#[test]
fn test_rev_override() {
    let test_repo = TestRepo::new();
    let first = test_repo.commits(2);
    test_repo.tag("v1.0.0", first);
    let second = test_repo.commits(2);
    test_repo.tag("v1.1.0", second);
    test_repo.commits(1);

    let output = run(&test_repo, &["--rev", &first.to_string()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1.0.0 (at HEAD)"), "got: {}", stdout);
    assert!(!stdout.contains("1.1.0"), "got: {}", stdout);
}

#[test]
fn test_unknown_rev_fails() {
    let test_repo = TestRepo::new();
    test_repo.commits(1);

    let output = run(&test_repo, &["--rev", "no-such-branch"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to locate nearest version"), "got: {}", stderr);
}

#[test]
fn test_no_early_exit_reports_same_versions() {
    let test_repo = TestRepo::new();
    let old = test_repo.commits(3);
    test_repo.tag("v0.9.0", old);
    let rc = test_repo.commits(2);
    test_repo.tag("v1.0.0-rc.1", rc);
    test_repo.commits(1);

    let fast = run(&test_repo, &[]);
    let full = run(&test_repo, &["--no-early-exit"]);
    assert!(full.status.success());
    assert_eq!(fast.stdout, full.stdout);
    let stdout = String::from_utf8(full.stdout).unwrap();
    assert!(stdout.contains("1.0.0-rc.1 (1 commit since)"), "got: {}", stdout);
    assert!(stdout.contains("0.9.0 (3 commits since)"), "got: {}", stdout);
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_from_user_config_dir() {
    let test_repo = TestRepo::new();
    let head = test_repo.commits(1);
    test_repo.tag("release-2.5.0", head);

    let config_home = tempfile::TempDir::new().unwrap();
    std::fs::write(
        config_home.path().join("nearestversion.toml"),
        "[tags]\nprefix = \"release-\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_nearest-version"))
        .current_dir(test_repo.dir.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2.5.0 (at HEAD)"), "got: {}", stdout);
}

#[test]
fn test_zero_tag_is_reported_as_release() {
    let test_repo = TestRepo::new();
    let head = test_repo.commits(1);
    test_repo.tag("v0.0.0", head);

    let output = run(&test_repo, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0.0.0 (at HEAD)"), "got: {}", stdout);
    assert!(!stdout.contains("No release tag is reachable"), "got: {}", stdout);
}

#[test]
fn test_bump_past_max_fails() {
    let test_repo = TestRepo::new();
    let head = test_repo.commits(1);
    test_repo.tag("v18446744073709551615.0.0", head);

    let output = run(&test_repo, &["--bump", "major"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot bump major version"), "got: {}", stderr);
}

#[test]
fn test_repository_without_tags() {
    let test_repo = TestRepo::new();
    test_repo.commits(3);

    let output = run(&test_repo, &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0.0.0 (3 commits since)"), "got: {}", stdout);
    assert!(stdout.contains("No release tag is reachable"), "got: {}", stdout);
}

#[test]
fn test_not_a_repository() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_nearest-version"))
        .args(["--repo", dir.path().join("missing").to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Git repository error"), "got: {}", stderr);
}
