//! One-shot check that the path builders point at the rolldown tests directory.
//!
//! Test harnesses call [`ensure_layout`] (or [`assert_layout`]) before running anything, so
//! every test that trusts [`tests_dir`] and [`project_dir`](crate::project_dir) runs against
//! the expected tree.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::workspace::{Workspace, WorkspaceError, WorkspaceRoot, tests_dir};

/// Trailing components `tests_dir()` must end with.
pub const EXPECTED_TESTS_DIR_TAIL: [&str; 4] = ["rolldown", "packages", "rolldown", "tests"];

/// Errors raised by the layout check.
#[derive(Debug)]
pub enum LayoutError {
  /// The workspace root could not be located.
  Workspace(WorkspaceError),
  /// The tests directory does not end with [`EXPECTED_TESTS_DIR_TAIL`].
  UnexpectedLayout {
    /// Resolved tests directory.
    path: PathBuf,
    /// Its last components, at most four.
    tail: Vec<String>,
  },
}

/// Verify that `tests_dir(root, &[])` ends in `rolldown/packages/rolldown/tests`.
pub fn verify_layout<R: WorkspaceRoot + ?Sized>(root: &R) -> Result<(), LayoutError> {
  let path = tests_dir(root, &[]);
  let components: Vec<String> = path
    .iter()
    .map(|component| component.to_string_lossy().into_owned())
    .collect();
  let tail = components[components.len().saturating_sub(EXPECTED_TESTS_DIR_TAIL.len())..].to_vec();

  if tail != EXPECTED_TESTS_DIR_TAIL {
    tracing::error!(path = %path.display(), ?tail, "unexpected tests directory layout");
    return Err(LayoutError::UnexpectedLayout { path, tail });
  }

  tracing::debug!(path = %path.display(), "tests directory layout verified");
  Ok(())
}

/// Discover the workspace from the working directory and verify its layout.
///
/// The check runs once per process; later calls return the memoised outcome.
pub fn ensure_layout() -> Result<&'static Workspace, &'static LayoutError> {
  static CHECK: OnceLock<Result<Workspace, LayoutError>> = OnceLock::new();

  CHECK
    .get_or_init(|| {
      let workspace = Workspace::discover_from_current_dir()?;
      verify_layout(&workspace)?;
      Ok(workspace)
    })
    .as_ref()
}

/// Like [`ensure_layout`], but panics when the layout is wrong.
pub fn assert_layout() -> &'static Workspace {
  match ensure_layout() {
    Ok(workspace) => workspace,
    Err(err) => panic!("{err}"),
  }
}

impl From<WorkspaceError> for LayoutError {
  fn from(err: WorkspaceError) -> Self {
    Self::Workspace(err)
  }
}

impl std::fmt::Display for LayoutError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Workspace(err) => write!(f, "failed to locate workspace: {}", err),
      Self::UnexpectedLayout { path, tail } => write!(
        f,
        "tests directory {} ends in {:?}, expected {:?}",
        path.display(),
        tail,
        EXPECTED_TESTS_DIR_TAIL
      ),
    }
  }
}

impl std::error::Error for LayoutError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Workspace(err) => Some(err),
      Self::UnexpectedLayout { .. } => None,
    }
  }
}
