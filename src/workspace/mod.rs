//! Absolute paths inside the rolldown monorepo.
//!
//! Root discovery and path composition live in separate submodules so the builders can be
//! tested against a fixed root without touching the filesystem.

mod paths;
mod root;

pub use paths::{PROJECT_BASE, TESTS_DIR_NAME, project_dir, tests_dir};
pub use root::{Workspace, WorkspaceError, WorkspaceRoot};
