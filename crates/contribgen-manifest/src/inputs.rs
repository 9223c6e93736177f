//! The unified input record shared by generation and validation.

use serde_json::Value;

use crate::defs::DefinitionSet;

/// Everything a generate or validate run needs, fully loaded.
///
/// Assembled by the CLI's input loader; the library itself never touches
/// the filesystem.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    /// Parsed definitions file.
    pub defs: DefinitionSet,

    /// The existing extension manifest, as read from disk. Unrelated fields
    /// are preserved verbatim by generation.
    pub manifest: serde_json::Map<String, Value>,

    /// Name used as the title of the configuration settings section.
    pub name: String,

    /// Optional prefix prepended as `"<prefix>: "` to palette command titles.
    pub prefix: Option<String>,

    /// Raw text of the source file that registers command handlers.
    pub handler_source: String,
}
