use crate::git::Git;
use crate::project::Project;
use crate::select::{self, TerminalPrompter};
use crate::worktree;

pub fn run(filter: Option<&str>) -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let primary = project.primary();
    let git = Git::new(&primary);

    let output = git.list_worktrees()?;
    let worktrees = worktree::parse_list(&output);

    let mut prompter = TerminalPrompter;
    let wt = select::select(&worktrees, &primary, filter, &mut prompter)?;

    println!("{}", wt.path.display());
    Ok(())
}
