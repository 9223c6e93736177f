//! Definition-file types.
//!
//! The definitions file is a JSON document with four top-level sections:
//! `commands`, `views`, `commandDefinitions`, and `configuration`. All maps
//! are order-preserving; declaration order flows through into the generated
//! manifest.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier prefix for command-palette variants of a command.
///
/// A palette-enabled command `foo.bar` is contributed twice: once as
/// `foo.bar` (hidden from the palette) and once as `cmd.foo.bar` (shown).
pub const PALETTE_COMMAND_PREFIX: &str = "cmd.";

/// Whether a command is available in a given surface.
///
/// Encoded in the definitions file as either a boolean or a VSCode `when`
/// condition string. An empty condition string counts as disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Availability {
    /// Always (`true`) or never (`false`).
    Always(bool),
    /// Available when the condition holds.
    When(String),
}

impl Availability {
    /// Returns true if this availability is enabled at all.
    pub fn is_enabled(&self) -> bool {
        match self {
            Availability::Always(enabled) => *enabled,
            Availability::When(condition) => !condition.is_empty(),
        }
    }

    /// Returns the `when` clause to emit for this availability.
    ///
    /// Boolean availability maps to the literal `"true"` clause; a condition
    /// string is passed through verbatim.
    pub fn when_clause(&self) -> String {
        match self {
            Availability::Always(_) => "true".to_string(),
            Availability::When(condition) => condition.clone(),
        }
    }
}

/// Icon for a command: a single codicon/path, or one per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSpec {
    /// Same icon for every theme.
    Single(String),
    /// Separate icons for dark and light themes.
    Themed {
        /// Icon used with dark themes.
        dark: String,
        /// Icon used with light themes.
        light: String,
    },
}

/// Definition of a single VSCode command.
///
/// Keyed by the stable command identifier in [`DefinitionSet::commands`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandDefinition {
    /// Title shown in the UI.
    pub title: String,

    /// Optional shorter title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,

    /// Optional category the command is grouped under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Condition under which the command is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enablement: Option<String>,

    /// Icon for this command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSpec>,

    /// Whether (or when) the command appears in the command palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_command_palette: Option<Availability>,

    /// Whether (or when) the command is eligible for a keybinding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keybinding: Option<Availability>,
}

impl CommandDefinition {
    /// Returns true if this command should get command-palette entries.
    pub fn in_palette(&self) -> bool {
        self.in_command_palette
            .as_ref()
            .is_some_and(Availability::is_enabled)
    }

    /// Returns true if this command should get a keybinding entry.
    pub fn has_keybinding(&self) -> bool {
        self.keybinding
            .as_ref()
            .is_some_and(Availability::is_enabled)
    }
}

/// A single entry in a view menu: either a command or a nested submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewEntry {
    /// Entry that runs a command when clicked.
    Command {
        /// Identifier of the command to run.
        command: String,
        /// Condition under which the entry is shown.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        when: Option<String>,
        /// Explicit override for the generated `group` value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group: Option<String>,
    },
    /// Entry that opens a submenu.
    Submenu {
        /// Identifier of the submenu.
        submenu: String,
        /// Condition under which the entry is shown.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        when: Option<String>,
        /// Explicit override for the generated `group` value.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        group: Option<String>,
    },
}

impl ViewEntry {
    /// Returns the explicit group override, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            ViewEntry::Command { group, .. } | ViewEntry::Submenu { group, .. } => group.as_deref(),
        }
    }
}

/// Ordered groups of view entries, keyed by group name.
///
/// Index `n` (1-based) within group `g` yields the default `group` value
/// `"g@n"` in the emitted menu entry.
pub type ViewGroups = IndexMap<String, Vec<ViewEntry>>;

/// A configuration setting definition.
///
/// Wraps the JSON-schema-like value emitted under
/// `contributes.configuration.properties`. Internal `__shape` marker keys
/// are stripped before output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigurationDefinition {
    /// JSON schema definition as it should appear in the manifest.
    pub json_definition: serde_json::Value,
}

/// The parsed definitions file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefinitionSet {
    /// Commands keyed by their stable identifier.
    #[serde(default)]
    pub commands: IndexMap<String, CommandDefinition>,

    /// View menus: view name -> group name -> ordered entries.
    #[serde(default)]
    pub views: IndexMap<String, ViewGroups>,

    /// Command enum: symbolic key -> command identifier.
    ///
    /// The validator checks both key and identifier against the handler
    /// source and the manifest.
    #[serde(default)]
    pub command_definitions: IndexMap<String, String>,

    /// Configuration settings keyed by their full setting name.
    #[serde(default)]
    pub configuration: IndexMap<String, ConfigurationDefinition>,
}

impl DefinitionSet {
    /// Parses a definitions file from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns true if `reference` resolves to a known command identifier,
    /// either bare or in its `cmd.`-prefixed palette form.
    pub fn is_known_command(&self, reference: &str) -> bool {
        if self.commands.contains_key(reference) {
            return true;
        }
        reference
            .strip_prefix(PALETTE_COMMAND_PREFIX)
            .is_some_and(|bare| self.commands.contains_key(bare))
    }
}
