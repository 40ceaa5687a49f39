use std::path::PathBuf;

use super::WorkspaceRoot;

/// Location of the rolldown package relative to the workspace root.
pub const PROJECT_BASE: &str = "packages/rolldown";

/// Name of the test directory inside the rolldown package.
pub const TESTS_DIR_NAME: &str = "tests";

/// Absolute path to `${WORKSPACE}/packages/rolldown`, extended with `segments`.
///
/// The root is looked up again on every call.
pub fn project_dir<R: WorkspaceRoot + ?Sized>(root: &R, segments: &[&str]) -> PathBuf {
  let mut joined = Vec::with_capacity(segments.len() + 1);
  joined.push(PROJECT_BASE);
  joined.extend_from_slice(segments);
  root.workspace_root(&joined)
}

/// Absolute path to `${WORKSPACE}/packages/rolldown/tests`, extended with `segments`.
pub fn tests_dir<R: WorkspaceRoot + ?Sized>(root: &R, segments: &[&str]) -> PathBuf {
  let mut joined = Vec::with_capacity(segments.len() + 1);
  joined.push(TESTS_DIR_NAME);
  joined.extend_from_slice(segments);
  project_dir(root, &joined)
}
