//! Error types for manifest validation.

use thiserror::Error;

/// A validation failure. The first failing check aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    /// The existing manifest references command identifiers that are not
    /// declared in the definitions file.
    #[error("contributes.{field} contains unknown commands: {}", .commands.join(", "))]
    UnknownCommands {
        /// Manifest field the references were found in
        /// (`commands`, `keybindings`, or `menus.commandPalette`).
        field: &'static str,
        /// The unresolved command identifiers, in manifest order.
        commands: Vec<String>,
    },

    /// A declared command never appears in the handler-registration source.
    #[error("No handler defined for command with key {key} and value \"{value}\"")]
    MissingHandler {
        /// Symbolic key from `commandDefinitions`.
        key: String,
        /// Command identifier the key maps to.
        value: String,
    },

    /// A palette-enabled command is not registered through a recognized
    /// auto-register helper.
    #[error(
        "No command palette handler defined for command with key {key} and value \"{value}\". \
         Use \"registerCommandPaletteCommand\" or \"autoRegisterCommand\" to register the \
         command, or bind a generator with \"= createAutoRegisterCommand\" and register \
         through it"
    )]
    MissingPaletteHandler {
        /// Symbolic key from `commandDefinitions`.
        key: String,
        /// Command identifier the key maps to.
        value: String,
    },

    /// A declared command never appears anywhere in the manifest.
    #[error("Found unused command with key {key} and value \"{value}\"")]
    UnusedCommand {
        /// Symbolic key from `commandDefinitions`.
        key: String,
        /// Command identifier the key maps to.
        value: String,
    },
}
