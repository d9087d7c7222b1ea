use std::path::Path;
use std::process::{Command, Stdio};

use serde::Deserialize;

/// Pull-request collaborator backed by the `gh` CLI. Optional: absence is
/// detected once per invocation and treated as "no PR integration", never as
/// an error.
pub struct PullRequests {
    available: bool,
}

#[derive(Deserialize)]
struct PrState {
    state: String,
}

impl PullRequests {
    pub fn detect() -> Self {
        let available = Command::new("gh")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success());
        Self { available }
    }

    pub fn available(&self) -> bool {
        self.available
    }

    /// Interactive `gh pr create` in the worktree.
    pub fn create(&self, worktree: &Path) -> Result<(), String> {
        if !self.available {
            return Err("gh is not installed".into());
        }
        let status = Command::new("gh")
            .args(["pr", "create", "--fill"])
            .current_dir(worktree)
            .status()
            .map_err(|e| format!("cannot run gh pr create: {e}"))?;
        if !status.success() {
            return Err("gh pr create failed".into());
        }
        Ok(())
    }

    /// Whether the branch's PR is merged; `None` when gh is missing, there
    /// is no PR, or the answer cannot be parsed.
    pub fn merged(&self, worktree: &Path, branch: &str) -> Option<bool> {
        if !self.available {
            return None;
        }
        let output = Command::new("gh")
            .args(["pr", "view", branch, "--json", "state"])
            .current_dir(worktree)
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let parsed: PrState = serde_json::from_slice(&output.stdout).ok()?;
        Some(parsed.state == "MERGED")
    }
}
