//! CLI argument definitions for the contribgen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// contribgen - VSCode extension manifest generator
#[derive(Parser)]
#[command(name = "contribgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate the `contributes` section from a definitions file and merge
    /// it into the extension manifest
    Generate {
        /// Path to the definitions file (JSON: commands, views,
        /// commandDefinitions, configuration)
        #[arg(short, long)]
        input: String,

        /// Path to write the resulting manifest to (defaults to the
        /// --package path when --overwrite is set)
        #[arg(short, long)]
        output: Option<String>,

        /// Source extension manifest (package.json) to merge into
        #[arg(short, long)]
        package: String,

        /// Overwrite the source manifest in place
        #[arg(short = 'w', long)]
        overwrite: bool,

        /// Path to the source file that registers command handlers
        #[arg(long)]
        handler: String,

        /// Prefix prepended as "<prefix>: " to command palette titles
        #[arg(long)]
        prefix: Option<String>,

        /// Title of the configuration settings section (defaults to the
        /// manifest's "name" field)
        #[arg(long)]
        name: Option<String>,

        /// Also run validation after generating
        #[arg(long)]
        validate: bool,
    },

    /// Validate the extension manifest against the definitions file and the
    /// handler-registration source
    Validate {
        /// Path to the definitions file (JSON)
        #[arg(short, long)]
        input: String,

        /// Extension manifest (package.json) to validate
        #[arg(short, long)]
        package: String,

        /// Path to the source file that registers command handlers
        #[arg(long)]
        handler: String,

        /// Prefix prepended as "<prefix>: " to command palette titles
        #[arg(long)]
        prefix: Option<String>,

        /// Title of the configuration settings section (defaults to the
        /// manifest's "name" field)
        #[arg(long)]
        name: Option<String>,
    },
}
