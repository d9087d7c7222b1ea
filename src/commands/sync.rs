use crate::git::Git;
use crate::project::Project;

/// Update the primary worktree from its remote: fetch with pruning, then
/// fast-forward only. Divergence is surfaced, never resolved here.
pub fn run() -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let git = Git::new(project.primary());

    if !git.has_origin() {
        return Err("no 'origin' remote configured".into());
    }

    git.fetch()?;
    git.pull_ff()?;
    eprintln!("arbor: primary worktree is up to date");
    Ok(())
}
