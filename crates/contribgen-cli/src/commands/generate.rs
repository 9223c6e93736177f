//! Generate command implementation
//!
//! Generates the `contributes` section, merges it into the existing
//! manifest, and writes the result tab-indented.

use anyhow::{Context, Result};
use colored::Colorize;
use contribgen_manifest::generate::generate;
use contribgen_manifest::validate::validate;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::input::{load_inputs, InputPaths, LoadResult};

/// Run the generate command
///
/// # Arguments
/// * `paths` - Input paths (definitions, package, handler) plus prefix/name
/// * `output` - Destination path (defaults to the package path with `overwrite`)
/// * `overwrite` - Whether writing over the source manifest is allowed
/// * `run_validate` - Whether to also run validation after generating
///
/// # Returns
/// Exit code: 0 success, 1 validation failure
pub fn run(
    paths: &InputPaths,
    output: Option<&str>,
    overwrite: bool,
    run_validate: bool,
) -> Result<ExitCode> {
    let output_path = resolve_output_path(paths, output, overwrite)?;

    println!(
        "{} {}",
        "Generating from:".cyan().bold(),
        paths.definitions.display()
    );

    let LoadResult { inputs, source_hash } =
        load_inputs(paths).context("Failed to load inputs")?;
    println!("{} json ({})", "Source:".dimmed(), &source_hash[..16]);

    let manifest_json = generate(&inputs).context("Failed to serialize manifest")?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output_path, &manifest_json)
        .with_context(|| format!("Failed to write manifest: {}", output_path.display()))?;

    println!(
        "{} Wrote {}",
        "SUCCESS".green().bold(),
        output_path.display()
    );

    if run_validate {
        println!(
            "{} {}",
            "Validating:".cyan().bold(),
            paths.package.display()
        );
        if let Err(e) = validate(&inputs) {
            eprintln!("  {} {}", "x".red(), e);
            return Ok(ExitCode::from(1));
        }
        println!("{} Manifest is consistent", "SUCCESS".green().bold());
    }

    Ok(ExitCode::SUCCESS)
}

/// The destination: `--output` when given, else the package path when
/// `--overwrite` allows it.
fn resolve_output_path(
    paths: &InputPaths,
    output: Option<&str>,
    overwrite: bool,
) -> Result<PathBuf> {
    match output {
        Some(path) => Ok(PathBuf::from(path)),
        None if overwrite => Ok(paths.package.clone()),
        None => anyhow::bail!(
            "no output file specified: pass --output <path>, or --overwrite to write the \
             source manifest in place"
        ),
    }
}
