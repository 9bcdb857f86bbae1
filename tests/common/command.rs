use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn scan_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    // Keep the user's real git configuration out of the picture.
    cmd.env("GIT_CONFIG_GLOBAL", "/dev/null");
    cmd.env("GIT_CONFIG_SYSTEM", "/dev/null");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_unsaved_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-unsaved").expect("Failed to find git-unsaved binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Initializes a repository with a fixed author so commits work without any
/// ambient configuration.
pub fn init_repository(dir: &Path) {
    std::fs::create_dir_all(dir).expect("Failed to create repository dir");
    run_git_command(dir, &["init", "--initial-branch=main"])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(dir, &["config", "user.email", "fake_email@email.com"])
        .assert()
        .success();
}

pub fn commit_all(dir: &Path, message: &str) {
    run_git_command(dir, &["add", "."]).assert().success();
    run_git_command(dir, &["commit", "-m", message])
        .assert()
        .success();
}

/// Wires `dir` to a local bare remote and pushes `main` with tracking, so
/// the repository ends up clean with a configured upstream.
pub fn configure_upstream(dir: &Path, remote_dir: &Path) {
    std::fs::create_dir_all(remote_dir).expect("Failed to create remote dir");
    run_git_command(remote_dir, &["init", "--bare", "--initial-branch=main", "."])
        .assert()
        .success();
    run_git_command(
        dir,
        &["remote", "add", "origin", &remote_dir.display().to_string()],
    )
    .assert()
    .success();
    run_git_command(dir, &["push", "-u", "origin", "main"])
        .assert()
        .success();
}
