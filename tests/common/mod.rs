#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub fn arbor() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arbor"))
}

pub fn run_in(dir: &Path, configure: impl FnOnce(&mut Command)) -> Output {
    let mut cmd = arbor();
    cmd.current_dir(dir);
    configure(&mut cmd);
    cmd.output().unwrap()
}

/// Run with the given text piped to stdin (menu answers, confirmations).
pub fn run_with_stdin(dir: &Path, input: &str, configure: impl FnOnce(&mut Command)) -> Output {
    let mut cmd = arbor();
    cmd.current_dir(dir);
    configure(&mut cmd);
    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    let mut child = cmd.spawn().unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

pub fn git(dir: &Path) -> Command {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(dir);
    cmd
}

pub fn git_ok(dir: &Path, args: &[&str]) {
    let output = git(dir).args(args).output().expect("git failed to start");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr),
    );
}

pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = git(dir).args(args).output().expect("git failed to start");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr),
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn has_local_branch(repo: &Path, branch: &str) -> bool {
    git(repo)
        .args([
            "show-ref",
            "--verify",
            "--quiet",
            &format!("refs/heads/{branch}"),
        ])
        .status()
        .unwrap()
        .success()
}

/// `arbor init` in a fresh temp dir, plus git identity and an initial
/// commit so worktrees can branch off trunk.
pub fn setup_project() -> (TempDir, PathBuf, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap().join("proj");

    let output = run_in(tmp.path(), |cmd| {
        cmd.arg("init").arg(&root);
    });
    assert!(
        output.status.success(),
        "arbor init failed: {}",
        String::from_utf8_lossy(&output.stderr),
    );

    let primary = root.join("main");
    git_ok(&primary, &["config", "user.name", "Test"]);
    git_ok(&primary, &["config", "user.email", "t@t"]);
    git_ok(&primary, &["commit", "--allow-empty", "-m", "init"]);
    (tmp, root, primary)
}

/// Project plus a bare `origin` with trunk pushed.
pub fn setup_project_with_origin() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let (tmp, root, primary) = setup_project();
    let origin = root.join("origin.git");
    let status = Command::new("git")
        .args(["init", "--bare", "--initial-branch=main"])
        .arg(&origin)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "git init --bare failed");
    let mut cmd = git(&primary);
    cmd.args(["remote", "add", "origin"]).arg(&origin);
    assert!(cmd.status().unwrap().success());
    git_ok(&primary, &["push", "-u", "origin", "main"]);
    (tmp, root, primary, origin)
}

/// `arbor start` a branch and return the printed worktree path.
pub fn start_branch(root: &Path, branch: &str) -> PathBuf {
    let primary = root.join("main");
    let output = run_in(&primary, |cmd| {
        cmd.args(["start", branch]);
    });
    assert!(
        output.status.success(),
        "arbor start {branch} failed: {}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let path = PathBuf::from(stdout.trim());
    assert!(path.exists(), "start should print an existing path");
    path
}

pub fn commit_file(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
    git_ok(dir, &["add", name]);
    git_ok(dir, &["commit", "-m", &format!("add {name}")]);
}

pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
