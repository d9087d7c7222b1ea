use std::path::Path;

use serde::Deserialize;

/// Per-project settings. Every component takes these explicitly; there is
/// no ambient global state. `arbor.toml` at the project root overrides any
/// subset of the defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory name of the primary worktree under the project root.
    pub primary_dir: String,
    /// Directory name of the feature-worktree container.
    pub trees_dir: String,
    /// Sentinel file identifying the project root; content is ignored.
    pub marker_file: String,
    /// Shared-path configuration file, one relative path per line.
    pub shared_file: String,
    /// Fallback source branch when no current branch is resolvable.
    pub trunk_branch: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            primary_dir: "main".into(),
            trees_dir: "trees".into(),
            marker_file: ".arbor-project".into(),
            shared_file: ".arbor-shared".into(),
            trunk_branch: "main".into(),
        }
    }
}

pub const SETTINGS_FILE: &str = "arbor.toml";

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsOverrides {
    primary_dir: Option<String>,
    trees_dir: Option<String>,
    marker_file: Option<String>,
    shared_file: Option<String>,
    trunk_branch: Option<String>,
}

impl Settings {
    /// Defaults merged with `arbor.toml` from `dir`, if present.
    pub fn load(dir: &Path) -> Result<Self, String> {
        let path = dir.join(SETTINGS_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("cannot read {}: {e}", path.display())),
        };
        let overrides: SettingsOverrides =
            toml::from_str(&text).map_err(|e| format!("invalid {}: {e}", path.display()))?;
        let mut settings = Self::default();
        if let Some(v) = overrides.primary_dir {
            settings.primary_dir = v;
        }
        if let Some(v) = overrides.trees_dir {
            settings.trees_dir = v;
        }
        if let Some(v) = overrides.marker_file {
            settings.marker_file = v;
        }
        if let Some(v) = overrides.shared_file {
            settings.shared_file = v;
        }
        if let Some(v) = overrides.trunk_branch {
            settings.trunk_branch = v;
        }
        Ok(settings)
    }
}
