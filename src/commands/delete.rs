use crate::cli::FinishFlags;
use crate::commands::finish;
use crate::git::Git;
use crate::project::Project;
use crate::select::{self, TerminalPrompter};
use crate::worktree;

/// Selector sugar over `finish`: resolve a filter to one worktree, then
/// finish its branch.
pub fn run(filter: Option<&str>, flags: FinishFlags) -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let primary = project.primary();
    let git = Git::new(&primary);

    let output = git.list_worktrees()?;
    let worktrees = worktree::parse_list(&output);

    let mut prompter = TerminalPrompter;
    let wt = select::select(&worktrees, &primary, filter, &mut prompter)?;
    let branch = wt
        .branch
        .clone()
        .ok_or_else(|| format!("worktree {} has no branch; use `arbor cancel`", wt.path.display()))?;

    finish::finish_branch(&project, &branch, flags, &mut prompter)
}
