use crate::commands::finish::{current_feature_branch, step_out_of};
use crate::git::Git;
use crate::project::Project;
use crate::select::{Prompter, TerminalPrompter};
use crate::worktree::{self, is_same_path};

/// The fast path out: no push, forced removal, branch kept unless asked.
pub fn run(branch: Option<&str>, delete_branch: bool) -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let mut prompter = TerminalPrompter;
    let branch = match branch {
        Some(b) => b.to_string(),
        None => current_feature_branch(&project)?,
    };
    cancel_branch(&project, &branch, delete_branch, &mut prompter)
}

pub fn cancel_branch(
    project: &Project,
    branch: &str,
    delete_branch: bool,
    prompter: &mut dyn Prompter,
) -> Result<(), String> {
    let primary = project.primary();
    let git = Git::new(&primary);

    let output = git.list_worktrees()?;
    let worktrees = worktree::parse_list(&output);
    let wt = worktree::find_by_branch(&worktrees, branch)
        .ok_or_else(|| format!("no worktree found for branch: {branch}"))?;
    if is_same_path(&wt.path, &primary) {
        return Err("cannot cancel the primary worktree".into());
    }
    let target = wt.path.clone();

    let changed = Git::changed_files(&target);
    if !changed.is_empty() {
        eprintln!(
            "arbor: worktree has {} uncommitted change(s)",
            changed.len()
        );
        if !prompter.confirm("discard them?") {
            return Err("aborted".into());
        }
    }

    step_out_of(&target, &primary)?;
    git.remove_worktree(&target, true)?;
    eprintln!("arbor: removed worktree {}", target.display());

    if delete_branch {
        if git.is_branch_merged(branch, &project.settings.trunk_branch) {
            git.delete_branch(branch, false)?;
            eprintln!("arbor: deleted branch '{branch}'");
        } else if prompter.confirm(&format!(
            "branch '{branch}' is not merged into '{}'; delete anyway?",
            project.settings.trunk_branch
        )) {
            git.delete_branch(branch, true)?;
            eprintln!("arbor: deleted branch '{branch}'");
        } else {
            return Err(format!("worktree removed, branch '{branch}' kept"));
        }
    }

    println!("{}", primary.display());
    Ok(())
}
