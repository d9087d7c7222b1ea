use crate::git::Git;
use crate::project::Project;

pub fn run() -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let git = Git::new(project.primary());

    let report = git.prune_worktrees()?;
    if report.is_empty() {
        eprintln!("arbor: nothing to prune");
    } else {
        eprintln!("{report}");
    }
    Ok(())
}
