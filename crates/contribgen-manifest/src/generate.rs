//! Manifest generation.
//!
//! Folds an [`Inputs`] record into the `contributes` block VSCode expects
//! and splices it onto the existing manifest. Unrelated manifest fields,
//! unmanaged `contributes` keys, and unmanaged menus all survive; the
//! generated `commands`, `keybindings`, `configuration`, the
//! `commandPalette` menu, and every declared view menu are replaced
//! wholesale.

use serde_json::{Map, Value};

use crate::defs::{CommandDefinition, DefinitionSet, ViewEntry, PALETTE_COMMAND_PREFIX};
use crate::inputs::Inputs;
use crate::manifest::{
    strip_shape, to_tab_indented_json, CommandContribution, ConfigurationContribution,
    KeybindingContribution, MenuEntryContribution,
};

/// Generates the new manifest and serializes it tab-indented.
pub fn generate(inputs: &Inputs) -> serde_json::Result<String> {
    let manifest = generate_manifest(inputs)?;
    to_tab_indented_json(&Value::Object(manifest))
}

/// Generates the new manifest as a JSON object.
pub fn generate_manifest(inputs: &Inputs) -> serde_json::Result<Map<String, Value>> {
    let mut manifest = inputs.manifest.clone();

    let existing = as_object(manifest.get("contributes"));
    let contributes = build_contributes(existing, inputs)?;
    manifest.insert("contributes".to_string(), Value::Object(contributes));

    Ok(manifest)
}

/// Builds the `contributes` object on top of the existing one.
fn build_contributes(
    existing: Map<String, Value>,
    inputs: &Inputs,
) -> serde_json::Result<Map<String, Value>> {
    let existing_menus = as_object(existing.get("menus"));

    let mut contributes = existing;
    contributes.insert(
        "commands".to_string(),
        serde_json::to_value(command_contributions(inputs))?,
    );
    contributes.insert(
        "keybindings".to_string(),
        serde_json::to_value(keybinding_contributions(&inputs.defs))?,
    );
    contributes.insert(
        "menus".to_string(),
        Value::Object(menu_contributions(existing_menus, &inputs.defs)?),
    );
    contributes.insert(
        "configuration".to_string(),
        serde_json::to_value(configuration_contribution(&inputs.defs, &inputs.name))?,
    );
    Ok(contributes)
}

/// All commands verbatim, then palette commands again under their prefixed
/// identifier (with the title prefix applied when configured).
fn command_contributions(inputs: &Inputs) -> Vec<CommandContribution> {
    let defs = &inputs.defs;
    let mut commands: Vec<CommandContribution> = defs
        .commands
        .iter()
        .map(|(id, def)| contribution(id.clone(), def.title.clone(), def))
        .collect();

    for (id, def) in palette_commands(defs) {
        let title = match &inputs.prefix {
            Some(prefix) => format!("{}: {}", prefix, def.title),
            None => def.title.clone(),
        };
        commands.push(contribution(
            format!("{}{}", PALETTE_COMMAND_PREFIX, id),
            title,
            def,
        ));
    }
    commands
}

fn contribution(command: String, title: String, def: &CommandDefinition) -> CommandContribution {
    CommandContribution {
        command,
        title,
        short_title: def.short_title.clone(),
        category: def.category.clone(),
        enablement: def.enablement.clone(),
        icon: def.icon.clone(),
    }
}

/// Keybinding entries for every command with a keybinding configured.
fn keybinding_contributions(defs: &DefinitionSet) -> Vec<KeybindingContribution> {
    defs.commands
        .iter()
        .filter(|(_, def)| def.has_keybinding())
        .map(|(id, def)| KeybindingContribution {
            command: id.clone(),
            when: def.keybinding.as_ref().map(|kb| kb.when_clause()),
        })
        .collect()
}

/// The `menus` object: existing unmanaged menus, the command palette, and
/// the declared view menus.
fn menu_contributions(
    existing: Map<String, Value>,
    defs: &DefinitionSet,
) -> serde_json::Result<Map<String, Value>> {
    let mut menus = existing;
    menus.insert(
        "commandPalette".to_string(),
        serde_json::to_value(command_palette_menu(defs))?,
    );
    for (view, groups) in &defs.views {
        let mut entries = Vec::new();
        for (group_name, group_entries) in groups {
            for (index, entry) in group_entries.iter().enumerate() {
                entries.push(view_menu_entry(group_name, index, entry));
            }
        }
        menus.insert(view.clone(), serde_json::to_value(entries)?);
    }
    Ok(menus)
}

/// Every command bare with `when: "false"`, then every palette command
/// prefixed with `when: "true"`.
fn command_palette_menu(defs: &DefinitionSet) -> Vec<MenuEntryContribution> {
    let mut entries: Vec<MenuEntryContribution> = defs
        .commands
        .keys()
        .map(|id| MenuEntryContribution::command_when(id.clone(), "false"))
        .collect();
    entries.extend(palette_commands(defs).map(|(id, _)| {
        MenuEntryContribution::command_when(format!("{}{}", PALETTE_COMMAND_PREFIX, id), "true")
    }));
    entries
}

/// A single view menu entry, with the default `"<group>@<n>"` group applied
/// when no explicit override is present.
fn view_menu_entry(group_name: &str, index: usize, entry: &ViewEntry) -> MenuEntryContribution {
    let group = entry
        .group()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}@{}", group_name, index + 1));
    match entry {
        ViewEntry::Command { command, when, .. } => MenuEntryContribution {
            command: Some(command.clone()),
            submenu: None,
            when: when.clone(),
            group: Some(group),
        },
        ViewEntry::Submenu { submenu, when, .. } => MenuEntryContribution {
            command: None,
            submenu: Some(submenu.clone()),
            when: when.clone(),
            group: Some(group),
        },
    }
}

/// The `configuration` object, with `__shape` markers stripped from every
/// schema definition.
fn configuration_contribution(defs: &DefinitionSet, name: &str) -> ConfigurationContribution {
    let mut configuration = ConfigurationContribution::new(name);
    for (key, def) in &defs.configuration {
        configuration
            .properties
            .insert(key.clone(), strip_shape(&def.json_definition));
    }
    configuration
}

fn palette_commands(
    defs: &DefinitionSet,
) -> impl Iterator<Item = (&String, &CommandDefinition)> {
    defs.commands.iter().filter(|(_, def)| def.in_palette())
}

fn as_object(value: Option<&Value>) -> Map<String, Value> {
    value
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::DefinitionSet;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn inputs_with(defs_json: &str, manifest: Value) -> Inputs {
        Inputs {
            defs: DefinitionSet::from_json(defs_json).unwrap(),
            manifest: manifest.as_object().cloned().unwrap_or_default(),
            name: "Test Extension".to_string(),
            prefix: None,
            handler_source: String::new(),
        }
    }

    fn contributes(manifest: &Map<String, Value>) -> &Map<String, Value> {
        manifest["contributes"].as_object().unwrap()
    }

    #[test]
    fn empty_inputs_produce_empty_contributions() {
        let inputs = inputs_with("{}", json!({ "name": "my-ext", "version": "1.0.0" }));
        let manifest = generate_manifest(&inputs).unwrap();

        assert_eq!(manifest["name"], json!("my-ext"));
        assert_eq!(manifest["version"], json!("1.0.0"));

        let contributes = contributes(&manifest);
        assert_eq!(contributes["commands"], json!([]));
        assert_eq!(contributes["keybindings"], json!([]));
        assert_eq!(contributes["menus"], json!({ "commandPalette": [] }));
        assert_eq!(
            contributes["configuration"],
            json!({ "type": "object", "title": "Test Extension", "properties": {} })
        );
    }

    #[test]
    fn palette_command_is_contributed_twice() {
        let inputs = inputs_with(
            r#"{
                "commands": {
                    "x": { "title": "X" },
                    "y": { "title": "Y", "inCommandPalette": true }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        let commands = contributes(&manifest)["commands"].as_array().unwrap();

        let ids: Vec<&str> = commands
            .iter()
            .map(|c| c["command"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["x", "y", "cmd.y"]);
    }

    #[test]
    fn prefix_applies_to_palette_titles_only() {
        let mut inputs = inputs_with(
            r#"{
                "commands": {
                    "x": { "title": "Plain" },
                    "y": { "title": "Fancy", "inCommandPalette": true }
                }
            }"#,
            json!({}),
        );
        inputs.prefix = Some("Git".to_string());
        let manifest = generate_manifest(&inputs).unwrap();
        let commands = contributes(&manifest)["commands"].as_array().unwrap();

        assert_eq!(commands[0]["title"], json!("Plain"));
        assert_eq!(commands[1]["title"], json!("Fancy"));
        assert_eq!(commands[2]["command"], json!("cmd.y"));
        assert_eq!(commands[2]["title"], json!("Git: Fancy"));
    }

    #[test]
    fn command_fields_are_copied_verbatim() {
        let inputs = inputs_with(
            r#"{
                "commands": {
                    "x": {
                        "title": "X",
                        "shortTitle": "x",
                        "category": "Tools",
                        "enablement": "editorTextFocus",
                        "icon": "$(gear)"
                    }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        let commands = contributes(&manifest)["commands"].as_array().unwrap();
        assert_eq!(
            commands[0],
            json!({
                "command": "x",
                "title": "X",
                "shortTitle": "x",
                "category": "Tools",
                "enablement": "editorTextFocus",
                "icon": "$(gear)"
            })
        );
    }

    #[test]
    fn keybindings_cover_boolean_and_condition() {
        let inputs = inputs_with(
            r#"{
                "commands": {
                    "a": { "title": "A" },
                    "b": { "title": "B", "keybinding": true },
                    "c": { "title": "C", "keybinding": "editorTextFocus" }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        assert_eq!(
            contributes(&manifest)["keybindings"],
            json!([
                { "command": "b", "when": "true" },
                { "command": "c", "when": "editorTextFocus" }
            ])
        );
    }

    #[test]
    fn palette_menu_hides_non_palette_commands() {
        let inputs = inputs_with(
            r#"{
                "commands": {
                    "x": { "title": "X" },
                    "y": { "title": "Y", "inCommandPalette": "view == git" }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        assert_eq!(
            contributes(&manifest)["menus"]["commandPalette"],
            json!([
                { "command": "x", "when": "false" },
                { "command": "y", "when": "false" },
                { "command": "cmd.y", "when": "true" }
            ])
        );
    }

    #[test]
    fn view_entries_get_positional_groups() {
        let inputs = inputs_with(
            r#"{
                "commands": { "a": { "title": "A" }, "b": { "title": "B" } },
                "views": {
                    "scm/title": {
                        "navigation": [
                            { "command": "a" },
                            { "command": "b", "when": "scmProvider =~ /git/" },
                            { "submenu": "more", "group": "pinned" }
                        ]
                    }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        assert_eq!(
            contributes(&manifest)["menus"]["scm/title"],
            json!([
                { "command": "a", "group": "navigation@1" },
                { "command": "b", "when": "scmProvider =~ /git/", "group": "navigation@2" },
                { "submenu": "more", "group": "pinned" }
            ])
        );
    }

    #[test]
    fn group_index_restarts_per_group() {
        let inputs = inputs_with(
            r#"{
                "commands": { "a": { "title": "A" }, "b": { "title": "B" } },
                "views": {
                    "view/item/context": {
                        "inline": [ { "command": "a" } ],
                        "actions": [ { "command": "b" } ]
                    }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        assert_eq!(
            contributes(&manifest)["menus"]["view/item/context"],
            json!([
                { "command": "a", "group": "inline@1" },
                { "command": "b", "group": "actions@1" }
            ])
        );
    }

    #[test]
    fn configuration_is_stripped_and_titled() {
        let inputs = inputs_with(
            r#"{
                "configuration": {
                    "ext.enabled": {
                        "jsonDefinition": {
                            "type": "boolean",
                            "default": true,
                            "__shape": "bool"
                        }
                    }
                }
            }"#,
            json!({}),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        assert_eq!(
            contributes(&manifest)["configuration"],
            json!({
                "type": "object",
                "title": "Test Extension",
                "properties": {
                    "ext.enabled": { "type": "boolean", "default": true }
                }
            })
        );
    }

    #[test]
    fn unmanaged_contributes_and_menus_survive() {
        let inputs = inputs_with(
            r#"{ "commands": { "x": { "title": "X" } } }"#,
            json!({
                "contributes": {
                    "languages": [ { "id": "mylang" } ],
                    "menus": {
                        "editor/context": [ { "command": "third.party" } ],
                        "commandPalette": [ { "command": "stale" } ]
                    }
                }
            }),
        );
        let manifest = generate_manifest(&inputs).unwrap();
        let contributes = contributes(&manifest);

        assert_eq!(contributes["languages"], json!([ { "id": "mylang" } ]));
        assert_eq!(
            contributes["menus"]["editor/context"],
            json!([ { "command": "third.party" } ])
        );
        // managed menu replaced, stale entry gone
        assert_eq!(
            contributes["menus"]["commandPalette"],
            json!([ { "command": "x", "when": "false" } ])
        );
    }

    #[test]
    fn output_is_tab_indented() {
        let inputs = inputs_with("{}", json!({}));
        let out = generate(&inputs).unwrap();
        assert!(out.contains("\n\t\"contributes\""));
        assert!(!out.contains("  \"contributes\""));
    }
}
