use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn stderr_msg(output: &Output) -> String {
    let s = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if s.is_empty() {
        "unknown error".into()
    } else {
        s
    }
}

/// Thin wrapper over the `git` binary, anchored at the primary worktree.
/// The worktree registry is git's; every query goes back to it.
pub struct Git {
    primary: PathBuf,
}

impl Git {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.primary);
        cmd
    }

    pub fn init_repo(dir: &Path, initial_branch: &str) -> Result<(), String> {
        let output = Command::new("git")
            .args(["init", "-b", initial_branch])
            .arg(dir)
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git init: {e}"))?;
        if !output.status.success() {
            return Err(format!("cannot init repository: {}", stderr_msg(&output)));
        }
        Ok(())
    }

    pub fn is_repo(dir: &Path) -> bool {
        Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["rev-parse", "--git-dir"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }

    pub fn has_local_branch(&self, name: &str) -> bool {
        self.cmd()
            .args(["show-ref", "--verify", "--quiet"])
            .arg(format!("refs/heads/{name}"))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }

    /// Branch of the checkout at `dir`; `None` on detached or unborn HEAD.
    pub fn current_branch(dir: &Path) -> Option<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["branch", "--show-current"])
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() { None } else { Some(name) }
    }

    /// `git worktree add -b` — creates branch and worktree as one unit;
    /// either both exist afterwards or neither does.
    pub fn add_worktree(&self, branch: &str, dest: &Path, source: &str) -> Result<(), String> {
        let output = self
            .cmd()
            .args(["worktree", "add", "--quiet", "-b", branch])
            .arg(dest)
            .arg(source)
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git worktree add: {e}"))?;
        if !output.status.success() {
            return Err(format!("cannot create worktree: {}", stderr_msg(&output)));
        }
        Ok(())
    }

    pub fn list_worktrees(&self) -> Result<String, String> {
        let output = self
            .cmd()
            .args(["worktree", "list", "--porcelain"])
            .output()
            .map_err(|e| format!("cannot run git worktree list: {e}"))?;
        if !output.status.success() {
            return Err(format!("cannot list worktrees: {}", stderr_msg(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    pub fn remove_worktree(&self, path: &Path, force: bool) -> Result<(), String> {
        let mut cmd = self.cmd();
        cmd.args(["worktree", "remove"]);
        if force {
            cmd.arg("--force");
        }
        cmd.arg(path);
        let output = cmd
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git worktree remove: {e}"))?;
        if !output.status.success() {
            return Err(format!(
                "cannot remove worktree {}: {}",
                path.display(),
                stderr_msg(&output)
            ));
        }
        Ok(())
    }

    pub fn prune_worktrees(&self) -> Result<String, String> {
        let output = self
            .cmd()
            .args(["worktree", "prune", "--verbose"])
            .output()
            .map_err(|e| format!("cannot run git worktree prune: {e}"))?;
        if !output.status.success() {
            return Err(format!(
                "cannot prune worktree metadata: {}",
                stderr_msg(&output)
            ));
        }
        Ok(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }

    /// Modified/untracked paths in `dir`, empty when clean.
    pub fn changed_files(dir: &Path) -> Vec<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["status", "--porcelain", "--untracked-files=normal"])
            .stderr(Stdio::null())
            .output();
        let Ok(output) = output else {
            return Vec::new();
        };
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| line.len() > 3)
            .map(|line| line[3..].to_string())
            .collect()
    }

    pub fn is_branch_merged(&self, branch: &str, trunk: &str) -> bool {
        self.cmd()
            .args(["merge-base", "--is-ancestor"])
            .arg(format!("refs/heads/{branch}"))
            .arg(trunk)
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }

    pub fn delete_branch(&self, branch: &str, force: bool) -> Result<(), String> {
        let flag = if force { "-D" } else { "-d" };
        let output = self
            .cmd()
            .args(["branch", flag, "--quiet", branch])
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git branch: {e}"))?;
        if !output.status.success() {
            return Err(format!(
                "cannot delete branch '{branch}': {}",
                stderr_msg(&output)
            ));
        }
        Ok(())
    }

    pub fn has_origin(&self) -> bool {
        self.cmd()
            .args(["remote", "get-url", "origin"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success())
    }

    pub fn push(dir: &Path, branch: &str) -> Result<(), String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["push", "--set-upstream", "origin", branch])
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git push: {e}"))?;
        if !output.status.success() {
            return Err(format!("cannot push '{branch}': {}", stderr_msg(&output)));
        }
        Ok(())
    }

    /// Remote branch may already be gone; callers ignore the result.
    pub fn delete_remote_branch(&self, branch: &str) -> Result<(), String> {
        let output = self
            .cmd()
            .args(["push", "origin", "--delete", branch])
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git push: {e}"))?;
        if !output.status.success() {
            return Err(format!(
                "cannot delete remote branch '{branch}': {}",
                stderr_msg(&output)
            ));
        }
        Ok(())
    }

    pub fn fetch(&self) -> Result<(), String> {
        let output = self
            .cmd()
            .args(["fetch", "--prune", "origin"])
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git fetch: {e}"))?;
        if !output.status.success() {
            return Err(format!("cannot fetch: {}", stderr_msg(&output)));
        }
        Ok(())
    }

    pub fn pull_ff(&self) -> Result<(), String> {
        let output = self
            .cmd()
            .args(["pull", "--ff-only"])
            .stdout(Stdio::null())
            .output()
            .map_err(|e| format!("cannot run git pull: {e}"))?;
        if !output.status.success() {
            return Err(format!("cannot fast-forward: {}", stderr_msg(&output)));
        }
        Ok(())
    }

    pub fn ahead_behind(dir: &Path, branch: &str) -> Option<(u64, u64)> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args([
                "rev-list",
                "--left-right",
                "--count",
                &format!("{branch}@{{upstream}}...{branch}"),
            ])
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let text = String::from_utf8_lossy(&output.stdout);
        let mut parts = text.trim().split('\t');
        let behind: u64 = parts.next()?.parse().ok()?;
        let ahead: u64 = parts.next()?.parse().ok()?;
        Some((ahead, behind))
    }
}
