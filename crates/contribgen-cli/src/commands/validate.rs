//! Validate command implementation
//!
//! Cross-checks the existing manifest against the definitions file and the
//! handler-registration source. Writes nothing.

use anyhow::{Context, Result};
use colored::Colorize;
use contribgen_manifest::validate::validate;
use std::process::ExitCode;

use crate::input::{load_inputs, InputPaths, LoadResult};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if consistent, 1 if any check fails
pub fn run(paths: &InputPaths) -> Result<ExitCode> {
    println!(
        "{} {}",
        "Validating:".cyan().bold(),
        paths.package.display()
    );

    let LoadResult { inputs, source_hash } =
        load_inputs(paths).context("Failed to load inputs")?;
    println!("{} json ({})", "Source:".dimmed(), &source_hash[..16]);

    if let Err(e) = validate(&inputs) {
        eprintln!("  {} {}", "x".red(), e);
        return Ok(ExitCode::from(1));
    }

    println!("{} Manifest is consistent", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}
