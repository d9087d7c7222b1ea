use std::path::Path;

use crate::cli::FinishFlags;
use crate::gh::PullRequests;
use crate::git::Git;
use crate::project::Project;
use crate::select::{Prompter, TerminalPrompter};
use crate::worktree::{self, is_same_path};

pub fn run(branch: Option<&str>, flags: FinishFlags) -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let mut prompter = TerminalPrompter;
    let branch = match branch {
        Some(b) => b.to_string(),
        None => current_feature_branch(&project)?,
    };
    finish_branch(&project, &branch, flags, &mut prompter)
}

/// The branch of the worktree the caller is standing in. Standing in the
/// primary worktree is rejected outright; finishing it would tear down the
/// authoritative checkout.
pub fn current_feature_branch(project: &Project) -> Result<String, String> {
    let cwd = std::env::current_dir().map_err(|e| format!("cannot read cwd: {e}"))?;
    if cwd.starts_with(project.primary()) {
        return Err(
            "cannot target the primary worktree; pass a branch name or run inside a tree".into(),
        );
    }
    Git::current_branch(&cwd).ok_or_else(|| "no current branch; pass a branch name".into())
}

pub fn finish_branch(
    project: &Project,
    branch: &str,
    flags: FinishFlags,
    prompter: &mut dyn Prompter,
) -> Result<(), String> {
    let primary = project.primary();
    let git = Git::new(&primary);

    let output = git.list_worktrees()?;
    let worktrees = worktree::parse_list(&output);
    let wt = worktree::find_by_branch(&worktrees, branch)
        .ok_or_else(|| format!("no worktree found for branch: {branch}"))?;
    if is_same_path(&wt.path, &primary) {
        return Err("cannot finish the primary worktree".into());
    }
    let target = wt.path.clone();

    let changed = Git::changed_files(&target);
    if !changed.is_empty() && !flags.force {
        let mut msg = String::from("worktree has uncommitted changes; use --force to override:");
        for path in &changed {
            msg.push_str("\n  ");
            msg.push_str(path);
        }
        return Err(msg);
    }

    if !flags.no_push {
        match Git::push(&target, branch) {
            Ok(()) => eprintln!("arbor: pushed '{branch}'"),
            Err(e) => {
                eprintln!("arbor: warning: {e}");
                if !prompter.confirm("continue without pushing?") {
                    return Err("aborted".into());
                }
            }
        }
    }

    let prs = PullRequests::detect();
    if flags.pr {
        let result = if prs.available() {
            prs.create(&target)
        } else {
            Err("gh is not installed".into())
        };
        if let Err(e) = result {
            eprintln!("arbor: warning: cannot create pull request: {e}");
            if !prompter.confirm("continue without a pull request?") {
                return Err("aborted".into());
            }
        }
    }

    step_out_of(&target, &primary)?;

    // Removal destroys uncommitted work, so force only when the caller
    // explicitly overrode the dirty check.
    git.remove_worktree(&target, flags.force && !changed.is_empty())?;
    eprintln!("arbor: removed worktree {}", target.display());

    let deleted = decide_branch_deletion(&git, &prs, &primary, branch, flags)?;
    if deleted && !flags.no_push {
        // The remote branch may never have existed.
        let _ = git.delete_remote_branch(branch);
    }

    println!("{}", primary.display());
    Ok(())
}

/// Priority: --keep-branch wins, then --rm, then the PR's merged state;
/// no PR integration or no answer keeps the branch.
fn decide_branch_deletion(
    git: &Git,
    prs: &PullRequests,
    primary: &Path,
    branch: &str,
    flags: FinishFlags,
) -> Result<bool, String> {
    if flags.keep_branch {
        return Ok(false);
    }
    if flags.remove_branch {
        git.delete_branch(branch, true)?;
        eprintln!("arbor: deleted branch '{branch}'");
        return Ok(true);
    }
    match prs.merged(primary, branch) {
        Some(true) => {
            // Squash merges leave the branch tip outside trunk history, so
            // a plain -d would refuse.
            git.delete_branch(branch, true)?;
            eprintln!("arbor: deleted merged branch '{branch}'");
            Ok(true)
        }
        Some(false) => {
            eprintln!("arbor: keeping branch '{branch}' (pull request not merged)");
            Ok(false)
        }
        None => {
            eprintln!("arbor: keeping branch '{branch}' (merge state unknown)");
            Ok(false)
        }
    }
}

/// Removing the directory the process stands in leaves the host shell on a
/// dead cwd; move to the primary worktree first.
pub fn step_out_of(target: &Path, primary: &Path) -> Result<(), String> {
    let Ok(cwd) = std::env::current_dir() else {
        return Ok(());
    };
    let canonical_target = std::fs::canonicalize(target).unwrap_or_else(|_| target.to_path_buf());
    let cwd = std::fs::canonicalize(&cwd).unwrap_or(cwd);
    if cwd.starts_with(&canonical_target) {
        std::env::set_current_dir(primary)
            .map_err(|e| format!("cannot leave {}: {e}", target.display()))?;
    }
    Ok(())
}
