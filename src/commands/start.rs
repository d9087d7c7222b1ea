use std::path::{Path, PathBuf};

use crate::git::Git;
use crate::project::Project;
use crate::shared;

pub fn run(args: &[String], source: Option<&str>, no_cd: bool) -> Result<(), String> {
    let (custom_path, branch) = split_args(args)?;

    let project = Project::locate_from_cwd()?;
    let primary = project.primary();
    let git = Git::new(&primary);

    if git.has_local_branch(branch) {
        return Err(format!(
            "branch '{branch}' already exists; use `arbor resume {branch}` to return to it"
        ));
    }

    let source = match source {
        Some(s) => s.to_string(),
        None => {
            let cwd = std::env::current_dir().map_err(|e| format!("cannot read cwd: {e}"))?;
            Git::current_branch(&cwd)
                .or_else(|| Git::current_branch(&primary))
                .unwrap_or_else(|| project.settings.trunk_branch.clone())
        }
    };

    let dest = match custom_path {
        Some(p) => resolve_custom_path(p)?,
        None => project.trees().join(branch),
    };
    if dest.exists() {
        return Err(format!("path already exists: {}", dest.display()));
    }
    if let Some(parent) = dest.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create directory {}: {e}", parent.display()))?;
    }

    git.add_worktree(branch, &dest, &source)?;
    eprintln!("arbor: created '{branch}' from '{source}'");

    // Best effort: a broken link never fails the start.
    match shared::read_config(&project.shared_file()) {
        Ok(entries) => shared::link_paths(&primary, &dest, &entries),
        Err(e) => eprintln!("arbor: warning: {e}"),
    }

    if !no_cd {
        println!("{}", dest.display());
    }
    Ok(())
}

/// Positional arguments are `[PATH] BRANCH`. With a single argument, a
/// path-shaped value means the branch is missing, not that a branch may
/// look like a path.
fn split_args(args: &[String]) -> Result<(Option<&str>, &str), String> {
    match args {
        [branch] => {
            if looks_like_path(branch) {
                Err(format!("'{branch}' looks like a path; missing branch name"))
            } else {
                Ok((None, branch))
            }
        }
        [path, branch] => Ok((Some(path.as_str()), branch)),
        _ => Err("expected [PATH] BRANCH".into()),
    }
}

/// Path-shaped means a leading `/`, `./`, or `../`. Everything else is
/// taken as a branch name, including names with internal slashes.
fn looks_like_path(arg: &str) -> bool {
    arg.starts_with('/') || arg.starts_with("./") || arg.starts_with("../")
}

fn resolve_custom_path(path: &str) -> Result<PathBuf, String> {
    let p = Path::new(path);
    if p.is_absolute() {
        return Ok(p.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| format!("cannot read cwd: {e}"))?;
    Ok(cwd.join(p))
}
