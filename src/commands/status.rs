use crate::git::Git;
use crate::project::Project;
use crate::worktree::is_same_path;

pub fn run() -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let cwd = std::env::current_dir().map_err(|e| format!("cannot read cwd: {e}"))?;

    let role = if cwd.starts_with(project.primary()) || is_same_path(&cwd, &project.primary()) {
        "primary worktree"
    } else if cwd.starts_with(project.trees()) {
        "feature worktree"
    } else {
        "outside the managed layout"
    };
    println!("project: {}", project.root.display());
    println!("role:    {role}");

    match Git::current_branch(&cwd) {
        Some(branch) => {
            println!("branch:  {branch}");
            if let Some((ahead, behind)) = Git::ahead_behind(&cwd, &branch) {
                println!("remote:  +{ahead} -{behind}");
            }
        }
        None => println!("branch:  (detached)"),
    }

    let changed = Git::changed_files(&cwd);
    if changed.is_empty() {
        println!("changes: none");
    } else {
        println!("changes:");
        for path in changed {
            println!("  {path}");
        }
    }
    Ok(())
}
