use std::path::Path;

use crate::config::Settings;
use crate::git::Git;

const SHARED_TEMPLATE: &str = "\
# Paths shared from the primary worktree into every feature worktree,
# one path per line, relative to the primary worktree.
# Example:
#   data
#   logs
";

pub fn run(path: Option<&Path>, no_cd: bool) -> Result<(), String> {
    let settings = Settings::default();

    let root = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir().map_err(|e| format!("cannot read cwd: {e}"))?,
    };
    std::fs::create_dir_all(&root)
        .map_err(|e| format!("cannot create directory {}: {e}", root.display()))?;

    let primary = root.join(&settings.primary_dir);
    let trees = root.join(&settings.trees_dir);
    let marker = root.join(&settings.marker_file);
    let shared = root.join(&settings.shared_file);

    std::fs::create_dir_all(&primary)
        .map_err(|e| format!("cannot create directory {}: {e}", primary.display()))?;
    std::fs::create_dir_all(&trees)
        .map_err(|e| format!("cannot create directory {}: {e}", trees.display()))?;

    if !Git::is_repo(&primary) {
        Git::init_repo(&primary, &settings.trunk_branch)?;
        eprintln!("arbor: initialized repository in {}", primary.display());
    }

    if !marker.exists() {
        std::fs::write(&marker, "")
            .map_err(|e| format!("cannot create {}: {e}", marker.display()))?;
    }
    if !shared.exists() {
        std::fs::write(&shared, SHARED_TEMPLATE)
            .map_err(|e| format!("cannot create {}: {e}", shared.display()))?;
    }

    eprintln!("arbor: project ready at {}", root.display());
    if !no_cd {
        println!("{}", primary.display());
    }
    Ok(())
}
