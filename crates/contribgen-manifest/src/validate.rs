//! Manifest validation.
//!
//! Cross-checks the existing manifest and the handler-registration source
//! against the definitions file. Checks run in order and the first failure
//! aborts; validation has no side effects.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::defs::DefinitionSet;
use crate::error::ValidateError;
use crate::inputs::Inputs;

/// Helper functions recognized as command-palette registration call sites.
pub const AUTO_REGISTER_FN_NAMES: &[&str] =
    &["registerCommandPaletteCommand", "autoRegisterCommand"];

/// Factory whose bound variable is also accepted as a registration helper:
/// `const register = createAutoRegisterCommand(...)`.
pub const CREATE_AUTO_REGISTER_FN: &str = "createAutoRegisterCommand";

static GENERATOR_BINDING: OnceLock<Regex> = OnceLock::new();

fn generator_binding_regex() -> &'static Regex {
    GENERATOR_BINDING.get_or_init(|| {
        Regex::new(&format!(r"(\w+) = {}", CREATE_AUTO_REGISTER_FN)).expect("invalid regex pattern")
    })
}

/// Validates the manifest and handler source against the definitions.
///
/// Checks, in order:
/// 1. every command reference in `contributes.commands`,
///    `contributes.keybindings`, and `contributes.menus.commandPalette`
///    resolves to a known command (bare or `cmd.`-prefixed);
/// 2. every declared command appears in the handler source, and
///    palette-enabled commands are registered through a recognized
///    auto-register helper;
/// 3. every declared command appears somewhere in the manifest JSON.
pub fn validate(inputs: &Inputs) -> Result<(), ValidateError> {
    check_manifest_references(inputs)?;
    check_handlers(inputs)?;
    check_manifest_usage(inputs)?;
    Ok(())
}

/// Every `command` reference in the managed manifest fields must be known.
fn check_manifest_references(inputs: &Inputs) -> Result<(), ValidateError> {
    let contributes = inputs.manifest.get("contributes");

    let fields: [(&'static str, Option<&Value>); 3] = [
        ("commands", lookup(contributes, &["commands"])),
        ("keybindings", lookup(contributes, &["keybindings"])),
        (
            "menus.commandPalette",
            lookup(contributes, &["menus", "commandPalette"]),
        ),
    ];

    for (field, entries) in fields {
        let unknown = unknown_commands(entries, &inputs.defs);
        if !unknown.is_empty() {
            return Err(ValidateError::UnknownCommands {
                field,
                commands: unknown,
            });
        }
    }
    Ok(())
}

/// Collects command references in `entries` that resolve to no known command.
fn unknown_commands(entries: Option<&Value>, defs: &DefinitionSet) -> Vec<String> {
    let Some(entries) = entries.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| entry.get("command").and_then(Value::as_str))
        .filter(|command| !command.is_empty() && !defs.is_known_command(command))
        .map(str::to_string)
        .collect()
}

/// Every declared command must have a handler registration; palette-enabled
/// commands must go through an auto-register helper.
fn check_handlers(inputs: &Inputs) -> Result<(), ValidateError> {
    let source = &inputs.handler_source;
    let helper_names = registration_helper_names(source);

    for (key, value) in &inputs.defs.command_definitions {
        if !source.contains(key.as_str()) && !source.contains(value.as_str()) {
            return Err(ValidateError::MissingHandler {
                key: key.clone(),
                value: value.clone(),
            });
        }

        let palette_enabled = inputs
            .defs
            .commands
            .get(value)
            .is_some_and(|def| def.in_palette());
        if palette_enabled && !has_auto_register_call(source, &helper_names, key, value) {
            return Err(ValidateError::MissingPaletteHandler {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// The recognized helper names, plus any variable bound from the factory.
fn registration_helper_names(source: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    if let Some(captures) = generator_binding_regex().captures(source) {
        if let Some(bound) = captures.get(1) {
            names.push(bound.as_str());
        }
    }
    names.extend(AUTO_REGISTER_FN_NAMES);
    names
}

/// Best-effort call-site match: `helper(Qualifier.KEY` or `helper(value`.
fn has_auto_register_call(source: &str, helper_names: &[&str], key: &str, value: &str) -> bool {
    helper_names.iter().any(|name| {
        let by_key = Regex::new(&format!(
            r"{}\(?\s*(\w+\.){}",
            regex::escape(name),
            regex::escape(key)
        ))
        .expect("invalid call-site pattern");
        let by_value = Regex::new(&format!(
            r"{}\(?\s*\(?{}",
            regex::escape(name),
            regex::escape(value)
        ))
        .expect("invalid call-site pattern");
        by_key.is_match(source) || by_value.is_match(source)
    })
}

/// Every declared command must appear somewhere in the manifest JSON.
fn check_manifest_usage(inputs: &Inputs) -> Result<(), ValidateError> {
    let serialized = Value::Object(inputs.manifest.clone()).to_string();
    for (key, value) in &inputs.defs.command_definitions {
        if !serialized.contains(key.as_str()) && !serialized.contains(value.as_str()) {
            return Err(ValidateError::UnusedCommand {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(())
}

/// Walks `path` down a JSON object tree.
fn lookup<'a>(root: Option<&'a Value>, path: &[&str]) -> Option<&'a Value> {
    let mut current = root?;
    for segment in path {
        current = current.get(segment)?;
    }
    Some(current)
}
