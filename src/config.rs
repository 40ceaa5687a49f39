//! Configuration for locating the workspace root.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// File searched for in the discovery start directory.
pub const DEFAULT_CONFIG_FILE: &str = "rolldown-testing.json";

/// Marker that identifies the monorepo root when no configuration is present.
pub const DEFAULT_ROOT_MARKER: &str = "pnpm-workspace.yaml";

/// Settings controlling how the workspace root is discovered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
  /// File names whose presence marks a directory as the workspace root.
  pub root_markers: Vec<String>,
}

impl Default for WorkspaceConfig {
  fn default() -> Self {
    Self {
      root_markers: vec![DEFAULT_ROOT_MARKER.into()],
    }
  }
}

impl WorkspaceConfig {
  /// Load configuration from `dir`, falling back to defaults when the file is absent or
  /// cannot be parsed.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
      Ok(config) => Some(config),
      Err(err) => {
        tracing::warn!(path = %path.display(), error = %err, "ignoring invalid workspace config");
        None
      }
    }
  }

  /// Returns `true` when `dir` contains one of the configured root markers.
  pub fn is_root(&self, dir: &Path) -> bool {
    self
      .root_markers
      .iter()
      .any(|marker| dir.join(marker).exists())
  }
}
