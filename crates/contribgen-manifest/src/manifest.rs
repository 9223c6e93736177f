//! Manifest-side contribution types and JSON helpers.
//!
//! These are the shapes emitted under `contributes` in the extension
//! manifest. They are also used leniently on the read side: the validator
//! deserializes whatever the existing manifest holds, so every field other
//! than the entry identifier is optional there.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defs::IconSpec;

/// An entry in `contributes.commands`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandContribution {
    /// Command identifier.
    pub command: String,

    /// Title shown in the UI.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enablement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSpec>,
}

/// An entry in `contributes.keybindings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeybindingContribution {
    /// Command identifier the keybinding is eligible for.
    pub command: String,

    /// Condition under which the keybinding applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
}

/// An entry in a `contributes.menus` menu: a command or a submenu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntryContribution {
    /// Command to run. Exactly one of `command`/`submenu` is set on the
    /// entries this tool emits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Submenu to open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<String>,

    /// Condition under which the entry is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Sort group, `"<group>@<index>"` for generated view entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl MenuEntryContribution {
    /// Creates a command entry with only a `when` clause (palette menu shape).
    pub fn command_when(command: impl Into<String>, when: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            submenu: None,
            when: Some(when.into()),
            group: None,
        }
    }
}

/// The `contributes.configuration` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationContribution {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Title of the settings section.
    pub title: String,

    /// Setting name -> JSON schema definition.
    pub properties: serde_json::Map<String, Value>,
}

impl ConfigurationContribution {
    /// Creates an empty configuration object with the given section title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            schema_type: "object".to_string(),
            title: title.into(),
            properties: serde_json::Map::new(),
        }
    }
}

/// Internal marker key carried by typed configuration definitions.
const SHAPE_MARKER: &str = "__shape";

/// Strips `__shape` marker keys from a configuration schema value.
///
/// Recurses into objects and arrays; primitives pass through unchanged.
pub fn strip_shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| key.as_str() != SHAPE_MARKER)
                .map(|(key, inner)| (key.clone(), strip_shape(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(strip_shape).collect()),
        other => other.clone(),
    }
}

/// Serializes a JSON value tab-indented, the way VSCode scaffolds
/// `package.json`.
pub fn to_tab_indented_json(value: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json always emits valid UTF-8
    Ok(String::from_utf8(buf).expect("serializer produced invalid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn strip_shape_removes_nested_markers() {
        let schema = json!({
            "type": "object",
            "__shape": { "internal": true },
            "properties": {
                "items": {
                    "type": "array",
                    "items": [
                        { "type": "string", "__shape": "s" },
                        { "type": "number" }
                    ]
                }
            }
        });
        let stripped = strip_shape(&schema);
        assert_eq!(
            stripped,
            json!({
                "type": "object",
                "properties": {
                    "items": {
                        "type": "array",
                        "items": [
                            { "type": "string" },
                            { "type": "number" }
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn strip_shape_passes_primitives_through() {
        assert_eq!(strip_shape(&json!(42)), json!(42));
        assert_eq!(strip_shape(&json!("__shape")), json!("__shape"));
        assert_eq!(strip_shape(&json!(null)), json!(null));
    }

    #[test]
    fn tab_indented_output_uses_tabs() {
        let out = to_tab_indented_json(&json!({ "a": { "b": 1 } })).unwrap();
        assert_eq!(out, "{\n\t\"a\": {\n\t\t\"b\": 1\n\t}\n}");
    }

    #[test]
    fn optional_command_fields_are_omitted() {
        let entry = MenuEntryContribution::command_when("x", "false");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({ "command": "x", "when": "false" }));
    }
}
