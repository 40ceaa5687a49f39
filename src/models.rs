//! Data structures describing the output manifest of a finished build.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Every file emitted by one build, in the order the bundler produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildOutput {
  /// Emitted chunks and assets.
  #[serde(default)]
  pub output: Vec<OutputItem>,
}

impl BuildOutput {
  /// Parse a manifest serialised as JSON.
  pub fn from_json(text: &str) -> serde_json::Result<Self> {
    serde_json::from_str(text)
  }
}

/// A single emitted file, discriminated by its `type` tag.
///
/// Tags other than `chunk` and `asset` are kept as [`OutputItem::Other`] so listings still
/// see every emitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputItem {
  /// Generated code bundle.
  Chunk(OutputChunk),
  /// Copied or processed static file.
  Asset(OutputAsset),
  /// Any other item kind the bundler emits.
  Other {
    /// Value of the `type` tag.
    kind: String,
    /// Output file name of the item.
    file_name: String,
  },
}

impl OutputItem {
  /// File name of the item relative to the output directory.
  pub fn file_name(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.file_name,
      Self::Asset(asset) => &asset.file_name,
      Self::Other { file_name, .. } => file_name,
    }
  }

  /// Returns the chunk when this item is one.
  pub fn as_chunk(&self) -> Option<&OutputChunk> {
    match self {
      Self::Chunk(chunk) => Some(chunk),
      Self::Asset(_) | Self::Other { .. } => None,
    }
  }

  /// Returns `true` for chunks.
  pub fn is_chunk(&self) -> bool {
    matches!(self, Self::Chunk(_))
  }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedItemRef<'a> {
  Chunk(&'a OutputChunk),
  Asset(&'a OutputAsset),
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct OtherItem {
  #[serde(rename = "type")]
  kind: String,
  file_name: String,
}

impl Serialize for OutputItem {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Chunk(chunk) => TaggedItemRef::Chunk(chunk).serialize(serializer),
      Self::Asset(asset) => TaggedItemRef::Asset(asset).serialize(serializer),
      Self::Other { kind, file_name } => OtherItem {
        kind: kind.clone(),
        file_name: file_name.clone(),
      }
      .serialize(serializer),
    }
  }
}

impl<'de> Deserialize<'de> for OutputItem {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let kind = value
      .get("type")
      .and_then(Value::as_str)
      .ok_or_else(|| D::Error::missing_field("type"))?
      .to_owned();

    match kind.as_str() {
      "chunk" => OutputChunk::deserialize(value)
        .map(Self::Chunk)
        .map_err(D::Error::custom),
      "asset" => OutputAsset::deserialize(value)
        .map(Self::Asset)
        .map_err(D::Error::custom),
      _ => OtherItem::deserialize(value)
        .map(|item| Self::Other {
          kind: item.kind,
          file_name: item.file_name,
        })
        .map_err(D::Error::custom),
    }
  }
}

/// Chunk metadata as reported by the bundler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputChunk {
  /// Output file name of the chunk.
  pub file_name: String,
  /// Chunk name before hashing and pattern substitution.
  #[serde(default)]
  pub name: Option<String>,
  /// Rendered chunk source.
  #[serde(default)]
  pub code: String,
  /// Whether the chunk is a static entry point.
  #[serde(default)]
  pub is_entry: bool,
  /// Whether the chunk is reached through a dynamic import.
  #[serde(default)]
  pub is_dynamic_entry: bool,
  /// Id of the module the chunk is a facade for, if any.
  #[serde(default)]
  pub facade_module_id: Option<String>,
  /// Names exported by the chunk.
  #[serde(default)]
  pub exports: Vec<String>,
  /// File names of statically imported chunks.
  #[serde(default)]
  pub imports: Vec<String>,
  /// File names of dynamically imported chunks.
  #[serde(default)]
  pub dynamic_imports: Vec<String>,
  /// Ids of the modules rendered into the chunk.
  #[serde(default)]
  pub modules: Vec<String>,
}

/// Static asset emitted next to the chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputAsset {
  /// Output file name of the asset.
  pub file_name: String,
  /// Name the asset was emitted with.
  #[serde(default)]
  pub name: Option<String>,
  /// Asset contents.
  #[serde(default)]
  pub source: String,
}
