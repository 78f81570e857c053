//! Article record shared by all newsprep tools

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single news article as stored in the dataset.
///
/// Only the fields the tools act on are modeled explicitly. `title`,
/// `abstract`, `source` and `tags` may be absent in the input and
/// deserialize to empty defaults. Everything else (`id`, publisher
/// metadata, ...) is carried in `extra` and round-trips untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,

    /// Short summary text. Keeps its JSON name even though `abstract`
    /// is a Rust keyword.
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,

    #[serde(default)]
    pub source: String,

    /// Ordered tag list. Duplicates are not expected but not guaranteed
    /// absent in the input.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date (`YYYY-MM-DD`). Opaque to tagging; rewritten by
    /// the date randomizer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Expanded article body produced by the expansion tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,

    /// Passthrough fields not touched by any tool
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
