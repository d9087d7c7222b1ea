use std::path::{Path, PathBuf};

use serde::Serialize;

/// One record from `git worktree list --porcelain`. Detached checkouts keep
/// an empty branch so path-based lookups still find them. The set is always
/// re-derived from git; the registry can change behind our back.
#[derive(Debug, Clone, Serialize)]
pub struct Worktree {
    pub path: PathBuf,
    pub head: String,
    pub branch: Option<String>,
    pub detached: bool,
}

impl Worktree {
    pub fn branch_name(&self) -> &str {
        self.branch.as_deref().unwrap_or("")
    }
}

/// Records are blank-line delimited; the final one may arrive without a
/// trailing blank line and must still be flushed.
pub fn parse_list(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current: Option<Worktree> = None;

    for line in output.lines() {
        if line.is_empty() {
            worktrees.extend(current.take());
        } else if let Some(path) = line.strip_prefix("worktree ") {
            worktrees.extend(current.take());
            current = Some(Worktree {
                path: PathBuf::from(path),
                head: String::new(),
                branch: None,
                detached: false,
            });
        } else if let Some(wt) = current.as_mut() {
            if let Some(head) = line.strip_prefix("HEAD ") {
                wt.head = head.to_string();
            } else if let Some(refname) = line.strip_prefix("branch ") {
                let short = refname.strip_prefix("refs/heads/").unwrap_or(refname);
                wt.branch = Some(short.to_string());
            } else if line == "detached" {
                wt.detached = true;
            }
        }
    }

    worktrees.extend(current.take());
    worktrees
}

pub fn find_by_branch<'a>(worktrees: &'a [Worktree], name: &str) -> Option<&'a Worktree> {
    worktrees
        .iter()
        .find(|wt| wt.branch.as_deref() == Some(name))
}

pub fn is_same_path(a: &Path, b: &Path) -> bool {
    let ca = std::fs::canonicalize(a).unwrap_or_else(|_| a.to_path_buf());
    let cb = std::fs::canonicalize(b).unwrap_or_else(|_| b.to_path_buf());
    ca == cb
}
