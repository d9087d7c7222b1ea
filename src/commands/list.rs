use std::fmt::Write;

use crate::git::Git;
use crate::project::Project;
use crate::terminal;
use crate::worktree::{self, Worktree, is_same_path};

pub fn run(json: bool) -> Result<(), String> {
    let project = Project::locate_from_cwd()?;
    let primary = project.primary();
    let git = Git::new(&primary);

    let output = git.list_worktrees()?;
    let worktrees = worktree::parse_list(&output);

    if json {
        let text = serde_json::to_string_pretty(&worktrees)
            .map_err(|e| format!("cannot serialize worktrees: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let cwd = std::env::current_dir()
        .ok()
        .and_then(|p| p.canonicalize().ok());

    let head_w = 8;
    let state_w = 10;
    let branch_w = worktrees
        .iter()
        .map(|wt| display_branch(wt).chars().count())
        .max()
        .unwrap_or(6)
        .clamp(6, 28);
    let cols = terminal::width();
    let path_w = cols.saturating_sub(branch_w + head_w + state_w + 9).max(16);

    println!(
        "   {:<branch_w$}  {:<head_w$}  {:<state_w$}  PATH",
        "BRANCH", "HEAD", "STATE",
    );
    for wt in &worktrees {
        let here = cwd.as_ref().is_some_and(|c| {
            let canon = std::fs::canonicalize(&wt.path).unwrap_or_else(|_| wt.path.clone());
            c.starts_with(&canon)
        });
        let marker = if here { "*" } else { " " };
        let head = if wt.head.len() > head_w {
            &wt.head[..head_w]
        } else {
            wt.head.as_str()
        };
        println!(
            " {marker} {:<branch_w$}  {:<head_w$}  {:<state_w$}  {}",
            clip(display_branch(wt), branch_w),
            head,
            clip(&state(wt, &project), state_w),
            clip(&wt.path.to_string_lossy(), path_w),
        );
    }
    Ok(())
}

fn display_branch(wt: &Worktree) -> &str {
    wt.branch.as_deref().unwrap_or("(detached)")
}

fn state(wt: &Worktree, project: &Project) -> String {
    let mut s = String::new();
    if is_same_path(&wt.path, &project.primary()) {
        s.push_str("primary");
    }
    let changed = Git::changed_files(&wt.path);
    if !changed.is_empty() {
        if !s.is_empty() {
            s.push(',');
        }
        write!(s, "*{}", changed.len()).unwrap();
    }
    if let Some(branch) = &wt.branch
        && let Some((ahead, behind)) = Git::ahead_behind(&wt.path, branch)
    {
        if ahead > 0 {
            write!(s, "+{ahead}").unwrap();
        }
        if behind > 0 {
            write!(s, "-{behind}").unwrap();
        }
    }
    if s.is_empty() { "-".into() } else { s }
}

fn clip(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        s.to_string()
    } else if max <= 1 {
        "…".into()
    } else {
        let mut out: String = chars[..max - 1].iter().collect();
        out.push('…');
        out
    }
}
