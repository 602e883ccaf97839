//! Serializer configuration.

use serde::{Deserialize, Serialize};

/// Options controlling the canonical markup layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerializeOptions {
    /// Unit repeated once per nesting level. Default: a single tab
    pub indent: String,
    /// Append one newline after the root element. Default: true
    pub trailing_newline: bool,
    /// When set, a single-line attribute list longer than this many bytes
    /// is re-flowed into the multi-line layout. Default: None (never)
    pub max_simple_len: Option<usize>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            trailing_newline: true,
            max_simple_len: None,
        }
    }
}
