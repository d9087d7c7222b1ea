pub mod common;

use common::*;

#[test]
fn single_match_is_taken_without_prompting() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/login");
    start_branch(&root, "feat/search");

    let output = run_in(&primary, |cmd| {
        cmd.args(["resume", "login"]);
    });
    assert_exit_code(&output, 0);
    assert_eq!(stdout_of(&output).trim(), wt.to_string_lossy());
}

#[test]
fn ambiguous_filter_opens_a_numbered_menu() {
    let (_tmp, root, primary) = setup_project();
    start_branch(&root, "feat/a");
    let wt_ab = start_branch(&root, "feat/ab");

    let output = run_with_stdin(&primary, "2\n", |cmd| {
        cmd.args(["resume", "feat/a"]);
    });
    assert_exit_code(&output, 0);
    assert_eq!(stdout_of(&output).trim(), wt_ab.to_string_lossy());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("1)"), "menu should be numbered: {stderr}");
    assert!(stderr.contains("2)"), "menu should be numbered: {stderr}");
}

#[test]
fn out_of_range_selection_fails() {
    let (_tmp, root, primary) = setup_project();
    start_branch(&root, "feat/a");
    start_branch(&root, "feat/b");

    let output = run_with_stdin(&primary, "7\n", |cmd| {
        cmd.arg("resume");
    });
    assert_exit_code(&output, 1);
    assert!(stderr_of(&output).contains("invalid selection"));
}

#[test]
fn no_match_is_an_error() {
    let (_tmp, root, primary) = setup_project();
    start_branch(&root, "feat/a");

    let output = run_in(&primary, |cmd| {
        cmd.args(["resume", "zzz"]);
    });
    assert_exit_code(&output, 1);
    assert!(stderr_of(&output).contains("no worktree matches 'zzz'"));
}

#[test]
fn primary_is_never_offered() {
    let (_tmp, _root, primary) = setup_project();

    // Only the primary worktree exists, so there is nothing to resume.
    let output = run_in(&primary, |cmd| {
        cmd.arg("resume");
    });
    assert_exit_code(&output, 1);
    assert!(stderr_of(&output).contains("no feature worktrees"));
}

#[test]
fn delete_composes_selection_with_finish() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/done");

    let output = run_in(&primary, |cmd| {
        cmd.args(["delete", "done", "--no-push"]);
    });
    assert_exit_code(&output, 0);
    assert!(!wt.exists());
    assert_eq!(stdout_of(&output).trim(), primary.to_string_lossy());
}

#[test]
fn delete_passes_finish_flags_through() {
    let (_tmp, root, primary) = setup_project();
    start_branch(&root, "feat/purge");

    let output = run_in(&primary, |cmd| {
        cmd.args(["delete", "purge", "--no-push", "--rm"]);
    });
    assert_exit_code(&output, 0);
    assert!(!has_local_branch(&primary, "feat/purge"));
}
