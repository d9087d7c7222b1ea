use std::path::{Path, PathBuf};

use crate::config::Settings;

/// A located project root with its two well-known subdirectories resolved.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub settings: Settings,
}

impl Project {
    pub fn primary(&self) -> PathBuf {
        self.root.join(&self.settings.primary_dir)
    }

    pub fn trees(&self) -> PathBuf {
        self.root.join(&self.settings.trees_dir)
    }

    pub fn shared_file(&self) -> PathBuf {
        self.root.join(&self.settings.shared_file)
    }

    /// Walk upward from `start` until a directory holds the marker file or
    /// both well-known subdirectories. Stat-only; never touches the tree.
    pub fn locate(start: &Path, settings: &Settings) -> Result<Self, String> {
        let start = std::fs::canonicalize(start)
            .map_err(|e| format!("cannot resolve {}: {e}", start.display()))?;

        for dir in start.ancestors() {
            if is_root(dir, settings) {
                return Ok(Self {
                    root: dir.to_path_buf(),
                    settings: Settings::load(dir)?,
                });
            }
        }

        Err(format!(
            "not inside an arbor project (no {} marker or {}/{} layout above {})",
            settings.marker_file,
            settings.primary_dir,
            settings.trees_dir,
            start.display()
        ))
    }

    /// Locate from the process working directory.
    pub fn locate_from_cwd() -> Result<Self, String> {
        let cwd = std::env::current_dir().map_err(|e| format!("cannot read cwd: {e}"))?;
        Self::locate(&cwd, &Settings::default())
    }
}

fn is_root(dir: &Path, settings: &Settings) -> bool {
    if dir.join(&settings.marker_file).is_file() {
        return true;
    }
    dir.join(&settings.primary_dir).is_dir() && dir.join(&settings.trees_dir).is_dir()
}
