use std::path::{Path, PathBuf};

use crate::config::WorkspaceConfig;

/// Resolves workspace-relative segments to an absolute path.
pub trait WorkspaceRoot {
  /// Join `segments`, in order, onto the workspace root.
  ///
  /// Segments are passed through verbatim; no normalisation or validation is applied. With
  /// [`Workspace`], an absolute segment replaces everything joined before it and an empty
  /// segment adds a trailing separator.
  fn workspace_root(&self, segments: &[&str]) -> PathBuf;
}

/// Monorepo root located on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
  root: PathBuf,
}

/// Errors that can occur while locating the workspace root.
#[derive(Debug)]
pub enum WorkspaceError {
  /// The process working directory could not be determined.
  CurrentDir {
    /// Source I/O error.
    source: std::io::Error,
  },
  /// No ancestor of the start directory carries a root marker.
  RootNotFound {
    /// Directory discovery started from.
    start: PathBuf,
    /// Markers that were searched for.
    markers: Vec<String>,
  },
}

impl Workspace {
  /// Wrap an already known workspace root.
  pub fn from_root(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Walk `start` and its ancestors until a directory containing a root marker is found.
  pub fn discover(start: &Path, config: &WorkspaceConfig) -> Result<Self, WorkspaceError> {
    let root = start
      .ancestors()
      .find(|dir| config.is_root(dir))
      .ok_or_else(|| WorkspaceError::RootNotFound {
        start: start.to_path_buf(),
        markers: config.root_markers.clone(),
      })?;
    tracing::debug!(root = %root.display(), start = %start.display(), "discovered workspace root");
    Ok(Self::from_root(root))
  }

  /// Discover the workspace from the process working directory, honouring any
  /// configuration file found there.
  pub fn discover_from_current_dir() -> Result<Self, WorkspaceError> {
    let cwd = std::env::current_dir().map_err(|source| WorkspaceError::CurrentDir { source })?;
    let config = WorkspaceConfig::discover(&cwd);
    Self::discover(&cwd, &config)
  }

  /// Root directory of the workspace.
  pub fn root(&self) -> &Path {
    &self.root
  }
}

impl WorkspaceRoot for Workspace {
  fn workspace_root(&self, segments: &[&str]) -> PathBuf {
    let mut path = self.root.clone();
    for segment in segments {
      path.push(segment);
    }
    path
  }
}

impl std::fmt::Display for WorkspaceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::CurrentDir { source } => {
        write!(f, "failed to read current directory: {}", source)
      }
      Self::RootNotFound { start, markers } => write!(
        f,
        "no workspace root above {} (looked for {})",
        start.display(),
        markers.join(", ")
      ),
    }
  }
}

impl std::error::Error for WorkspaceError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::CurrentDir { source } => Some(source),
      Self::RootNotFound { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::DEFAULT_ROOT_MARKER;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn joins_segments_in_order() {
    let workspace = Workspace::from_root("/repo");
    assert_eq!(
      workspace.workspace_root(&["packages/rolldown", "x", "y"]),
      PathBuf::from("/repo").join("packages/rolldown").join("x").join("y")
    );
  }

  #[test]
  fn no_segments_yields_root() {
    let workspace = Workspace::from_root("/repo");
    assert_eq!(workspace.workspace_root(&[]), PathBuf::from("/repo"));
  }

  #[test]
  fn absolute_segment_replaces_root() {
    let workspace = Workspace::from_root("/repo");
    assert_eq!(
      workspace.workspace_root(&["packages", "/elsewhere", "file.js"]),
      PathBuf::from("/elsewhere/file.js")
    );
  }

  #[test]
  fn empty_segment_adds_trailing_separator() {
    let workspace = Workspace::from_root("/repo");
    let path = workspace.workspace_root(&["tests", ""]);
    assert_eq!(path.as_os_str(), "/repo/tests/");
    assert_eq!(path, PathBuf::from("/repo/tests"));
  }

  #[test]
  fn discovers_nearest_marked_ancestor() {
    let temp = tempdir().expect("failed to create temp dir");
    let root = temp.path().join("rolldown");
    let nested = root.join("packages").join("rolldown").join("tests");
    fs::create_dir_all(&nested).expect("failed to create nested dirs");
    fs::write(root.join(DEFAULT_ROOT_MARKER), "packages:\n").expect("failed to write marker");

    let workspace =
      Workspace::discover(&nested, &WorkspaceConfig::default()).expect("root should be found");
    assert_eq!(workspace.root(), root.as_path());
  }

  #[test]
  fn honours_configured_markers() {
    let temp = tempdir().expect("failed to create temp dir");
    let nested = temp.path().join("crates").join("core");
    fs::create_dir_all(&nested).expect("failed to create nested dirs");
    fs::write(temp.path().join("Cargo.lock"), "").expect("failed to write marker");

    let config = WorkspaceConfig {
      root_markers: vec!["Cargo.lock".into()],
    };
    let workspace = Workspace::discover(&nested, &config).expect("root should be found");
    assert_eq!(workspace.root(), temp.path());
  }

  #[test]
  fn reports_missing_root() {
    let temp = tempdir().expect("failed to create temp dir");
    let config = WorkspaceConfig {
      root_markers: vec!["definitely-not-a-marker.lock".into()],
    };

    let err = Workspace::discover(temp.path(), &config).expect_err("no marker should fail");
    assert!(matches!(err, WorkspaceError::RootNotFound { .. }));
    assert!(err.to_string().contains("definitely-not-a-marker.lock"));
  }
}
