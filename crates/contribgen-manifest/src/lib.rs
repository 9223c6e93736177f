//! contribgen manifest library
//!
//! This crate provides the definition types, manifest generation, and
//! validation behind the `contribgen` CLI. Definitions are JSON documents
//! that declare a VSCode extension's commands, view/menu placements, and
//! configuration schema; generation folds them into the `contributes`
//! section of the extension manifest, and validation cross-checks the
//! manifest against the definitions and the extension's handler source.
//!
//! # Example
//!
//! ```
//! use contribgen_manifest::{DefinitionSet, Inputs};
//! use contribgen_manifest::generate::generate_manifest;
//! use contribgen_manifest::validate::validate;
//!
//! let defs = DefinitionSet::from_json(r#"{
//!     "commands": {
//!         "demo.hello": { "title": "Say Hello", "inCommandPalette": true }
//!     },
//!     "commandDefinitions": { "HELLO": "demo.hello" }
//! }"#).unwrap();
//!
//! let inputs = Inputs {
//!     defs,
//!     manifest: serde_json::Map::new(),
//!     name: "Demo".to_string(),
//!     prefix: None,
//!     handler_source: "autoRegisterCommand(Commands.HELLO, hello)".to_string(),
//! };
//!
//! let manifest = generate_manifest(&inputs).unwrap();
//! assert!(manifest.contains_key("contributes"));
//!
//! // Validation runs against the manifest on disk; here the empty one fails
//! // because the declared command is not referenced anywhere yet.
//! assert!(validate(&inputs).is_err());
//! ```
//!
//! # Modules
//!
//! - [`defs`]: definition-file types (commands, views, configuration)
//! - [`manifest`]: emitted contribution types and JSON helpers
//! - [`inputs`]: the unified input record
//! - [`generate`]: manifest generation and merging
//! - [`validate`]: manifest/handler cross-checks
//! - [`error`]: validation error types

pub mod defs;
pub mod error;
pub mod generate;
pub mod inputs;
pub mod manifest;
pub mod validate;

// Re-export commonly used types at the crate root
pub use defs::{
    Availability, CommandDefinition, ConfigurationDefinition, DefinitionSet, IconSpec, ViewEntry,
    ViewGroups, PALETTE_COMMAND_PREFIX,
};
pub use error::ValidateError;
pub use generate::{generate, generate_manifest};
pub use inputs::Inputs;
pub use manifest::{
    strip_shape, to_tab_indented_json, CommandContribution, ConfigurationContribution,
    KeybindingContribution, MenuEntryContribution,
};
pub use validate::{validate, AUTO_REGISTER_FN_NAMES, CREATE_AUTO_REGISTER_FN};
