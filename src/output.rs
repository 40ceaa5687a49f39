//! Assertable views over a finished build's output manifest.
//!
//! Name listings are sorted so expectations do not depend on the order the bundler emitted
//! files in. [`chunks`] keeps emission order for callers that correlate chunk metadata with
//! its position in the manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{BuildOutput, OutputChunk};

/// File names of every chunk in the output, sorted ascending.
pub fn chunk_names(output: &BuildOutput) -> Vec<String> {
  let mut names: Vec<String> = chunks(output)
    .into_iter()
    .map(|chunk| chunk.file_name.clone())
    .collect();
  names.sort();
  names
}

/// Chunks of the output in emission order.
pub fn chunks(output: &BuildOutput) -> Vec<&OutputChunk> {
  output.output.iter().filter_map(|item| item.as_chunk()).collect()
}

/// File names of every emitted item, chunks and assets alike, sorted ascending.
pub fn all_file_names(output: &BuildOutput) -> Vec<String> {
  let mut names: Vec<String> = output
    .output
    .iter()
    .map(|item| item.file_name().to_string())
    .collect();
  names.sort();
  names
}

/// Find the first chunk emitted under `file_name`.
pub fn chunk_by_file_name<'a>(output: &'a BuildOutput, file_name: &str) -> Option<&'a OutputChunk> {
  chunks(output)
    .into_iter()
    .find(|chunk| chunk.file_name == file_name)
}

/// Load a build output manifest serialised as JSON.
pub fn load_build_output(path: &Path) -> Result<BuildOutput> {
  let content = fs::read_to_string(path)
    .with_context(|| format!("build output not found at {}", path.display()))?;
  let output = BuildOutput::from_json(&content)
    .with_context(|| format!("failed to parse build output {}", path.display()))?;
  Ok(output)
}
