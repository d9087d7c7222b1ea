pub mod common;

use common::*;

#[test]
fn clean_cancel_removes_worktree_and_keeps_branch() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/clean");

    let output = run_in(&primary, |cmd| {
        cmd.args(["cancel", "feat/clean"]);
    });
    assert_exit_code(&output, 0);
    assert!(!wt.exists());
    assert!(has_local_branch(&primary, "feat/clean"));
    assert_eq!(stdout_of(&output).trim(), primary.to_string_lossy());
}

#[test]
fn dirty_cancel_asks_and_declining_keeps_everything() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/spike");
    std::fs::write(wt.join("scratch"), "notes").unwrap();

    // stdin closed: the confirmation gate declines.
    let output = run_in(&primary, |cmd| {
        cmd.args(["cancel", "feat/spike"]);
    });
    assert_exit_code(&output, 1);
    assert!(stderr_of(&output).contains("aborted"));
    assert!(wt.join("scratch").is_file());
}

#[test]
fn dirty_cancel_confirmed_discards_changes() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/discard");
    std::fs::write(wt.join("scratch"), "notes").unwrap();

    let output = run_with_stdin(&primary, "y\n", |cmd| {
        cmd.args(["cancel", "feat/discard"]);
    });
    assert_exit_code(&output, 0);
    assert!(!wt.exists());
}

#[test]
fn delete_branch_removes_a_merged_branch_without_asking() {
    let (_tmp, root, primary) = setup_project();
    // No extra commits: the branch tip equals trunk, so it counts as merged.
    start_branch(&root, "feat/merged");

    let output = run_in(&primary, |cmd| {
        cmd.args(["cancel", "feat/merged", "--delete-branch"]);
    });
    assert_exit_code(&output, 0);
    assert!(!has_local_branch(&primary, "feat/merged"));
}

#[test]
fn delete_branch_on_unmerged_branch_needs_confirmation() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/unmerged");
    commit_file(&wt, "extra.txt", "ahead of trunk");

    let output = run_in(&primary, |cmd| {
        cmd.args(["cancel", "feat/unmerged", "--delete-branch"]);
    });
    assert_exit_code(&output, 1);
    assert!(!wt.exists(), "worktree removal is unconditional");
    assert!(
        has_local_branch(&primary, "feat/unmerged"),
        "declined gate keeps the branch"
    );
}

#[test]
fn delete_branch_on_unmerged_branch_confirmed_forces_deletion() {
    let (_tmp, root, primary) = setup_project();
    let wt = start_branch(&root, "feat/drop");
    commit_file(&wt, "extra.txt", "ahead of trunk");

    let output = run_with_stdin(&primary, "y\n", |cmd| {
        cmd.args(["cancel", "feat/drop", "--delete-branch"]);
    });
    assert_exit_code(&output, 0);
    assert!(!has_local_branch(&primary, "feat/drop"));
}

#[test]
fn cancelling_the_primary_worktree_is_rejected() {
    let (_tmp, _root, primary) = setup_project();

    let output = run_in(&primary, |cmd| {
        cmd.arg("cancel");
    });
    assert_exit_code(&output, 1);
    assert!(stderr_of(&output).contains("cannot target the primary worktree"));
}
