use std::path::Path;

/// Parse the shared-path file: one project-relative path per line, `#`
/// comments and blank lines dropped, surrounding whitespace trimmed, order
/// kept. Entries are exact paths, not globs. A missing file is an empty
/// configuration, not an error.
pub fn read_config(path: &Path) -> Result<Vec<String>, String> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(format!("cannot read {}: {e}", path.display())),
    };
    Ok(parse_config(&text))
}

fn parse_config(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Replace each configured path in `worktree` with a symlink into `primary`.
///
/// Whatever the checkout materialized at the target is removed outright; it
/// is pristine versioned content at this point, never user data. Links are
/// absolute so they resolve from worktrees outside the trees container too.
/// Each entry is independent: a missing source or a failed link warns and
/// moves on. Re-running against an already linked worktree always
/// removes-then-relinks, so the end state is the same.
pub fn link_paths(primary: &Path, worktree: &Path, entries: &[String]) {
    for entry in entries {
        if let Err(e) = link_one(primary, worktree, entry) {
            eprintln!("arbor: warning: shared path {entry}: {e}");
        }
    }
}

fn link_one(primary: &Path, worktree: &Path, entry: &str) -> Result<(), String> {
    let source = primary.join(entry);
    let target = worktree.join(entry);

    if source.symlink_metadata().is_err() {
        return Err("not present in the primary worktree, skipped".into());
    }

    if let Ok(meta) = target.symlink_metadata() {
        let removed = if meta.file_type().is_dir() {
            std::fs::remove_dir_all(&target)
        } else {
            std::fs::remove_file(&target)
        };
        removed.map_err(|e| format!("cannot remove {}: {e}", target.display()))?;
    }

    if let Some(parent) = target.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create directory {}: {e}", parent.display()))?;
    }

    symlink(&source, &target).map_err(|e| format!("cannot link {}: {e}", target.display()))?;
    eprintln!("arbor: linked {entry}");
    Ok(())
}

fn symlink(source: &Path, target: &Path) -> Result<(), std::io::Error> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(source, target)
    }
    #[cfg(not(unix))]
    {
        if source.is_dir() {
            std::os::windows::fs::symlink_dir(source, target)
        } else {
            std::os::windows::fs::symlink_file(source, target)
        }
    }
}
