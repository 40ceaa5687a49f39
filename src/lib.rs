#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod models;
pub mod output;
pub mod startup;
pub mod workspace;

pub use config::WorkspaceConfig;
pub use models::{BuildOutput, OutputAsset, OutputChunk, OutputItem};
pub use output::{all_file_names, chunk_by_file_name, chunk_names, chunks, load_build_output};
pub use startup::{LayoutError, assert_layout, ensure_layout, verify_layout};
pub use workspace::{Workspace, WorkspaceError, WorkspaceRoot, project_dir, tests_dir};
