//! Input loading for the CLI.
//!
//! Resolves the CLI-supplied paths into a fully loaded
//! [`Inputs`] record: the parsed definitions file, the existing manifest,
//! and the raw handler-registration source. The library crate never touches
//! the filesystem; everything it needs is assembled here.

use std::path::{Path, PathBuf};

use contribgen_manifest::{DefinitionSet, Inputs};
use serde_json::Value;

/// Paths a generate or validate run reads from.
#[derive(Debug, Clone)]
pub struct InputPaths {
    /// Definitions file (JSON).
    pub definitions: PathBuf,
    /// Existing extension manifest (package.json).
    pub package: PathBuf,
    /// Handler-registration source file.
    pub handler: PathBuf,
    /// Optional palette title prefix.
    pub prefix: Option<String>,
    /// Optional configuration section title override.
    pub name: Option<String>,
}

/// Result of loading all inputs.
#[derive(Debug)]
pub struct LoadResult {
    /// The assembled inputs.
    pub inputs: Inputs,
    /// BLAKE3 hash of the definitions file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading inputs.
#[derive(Debug)]
pub enum InputError {
    /// A file could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The definitions file is not valid JSON or has the wrong shape.
    InvalidDefinitions { path: PathBuf, message: String },

    /// The manifest is not valid JSON.
    ManifestParse { path: PathBuf, message: String },

    /// The manifest parsed, but is not a JSON object.
    ManifestNotObject { path: PathBuf },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::InvalidDefinitions { path, message } => {
                write!(
                    f,
                    "invalid definitions file '{}': {}",
                    path.display(),
                    message
                )
            }
            InputError::ManifestParse { path, message } => {
                write!(
                    f,
                    "failed to parse manifest '{}' as JSON: {}",
                    path.display(),
                    message
                )
            }
            InputError::ManifestNotObject { path } => {
                write!(
                    f,
                    "manifest '{}' must be a JSON object at the top level",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads and assembles all inputs for a run.
///
/// The configuration section title resolves to, in order: the `--name`
/// override, the manifest's top-level `name` field, the empty string.
pub fn load_inputs(paths: &InputPaths) -> Result<LoadResult, InputError> {
    let definitions_content = read_file(&paths.definitions)?;
    let source_hash = blake3::hash(definitions_content.as_bytes())
        .to_hex()
        .to_string();

    let defs = DefinitionSet::from_json(&definitions_content).map_err(|e| {
        InputError::InvalidDefinitions {
            path: paths.definitions.clone(),
            message: e.to_string(),
        }
    })?;

    let manifest_content = read_file(&paths.package)?;
    let manifest_value: Value =
        serde_json::from_str(&manifest_content).map_err(|e| InputError::ManifestParse {
            path: paths.package.clone(),
            message: e.to_string(),
        })?;
    let Value::Object(manifest) = manifest_value else {
        return Err(InputError::ManifestNotObject {
            path: paths.package.clone(),
        });
    };

    let handler_source = read_file(&paths.handler)?;

    let name = paths
        .name
        .clone()
        .or_else(|| {
            manifest
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_default();

    Ok(LoadResult {
        inputs: Inputs {
            defs,
            manifest,
            name,
            prefix: paths.prefix.clone(),
            handler_source,
        },
        source_hash,
    })
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
