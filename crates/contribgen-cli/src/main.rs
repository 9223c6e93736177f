//! contribgen - VSCode extension manifest generator
//!
//! This binary generates the `contributes` section of a VSCode extension
//! manifest from a declarative definitions file, and validates the manifest
//! against the extension's handler-registration source.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use contribgen_cli::commands;
use contribgen_cli::input::InputPaths;

mod cli_args;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            package,
            overwrite,
            handler,
            prefix,
            name,
            validate,
        } => {
            let paths = input_paths(input, package, handler, prefix, name);
            commands::generate::run(&paths, output.as_deref(), overwrite, validate)
        }
        Commands::Validate {
            input,
            package,
            handler,
            prefix,
            name,
        } => {
            let paths = input_paths(input, package, handler, prefix, name);
            commands::validate::run(&paths)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

fn input_paths(
    input: String,
    package: String,
    handler: String,
    prefix: Option<String>,
    name: Option<String>,
) -> InputPaths {
    InputPaths {
        definitions: PathBuf::from(input),
        package: PathBuf::from(package),
        handler: PathBuf::from(handler),
        prefix,
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from([
            "contribgen",
            "generate",
            "--input",
            "defs.json",
            "--package",
            "package.json",
            "--handler",
            "src/commands.ts",
            "--overwrite",
            "--validate",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                input,
                output,
                package,
                overwrite,
                handler,
                prefix,
                name,
                validate,
            } => {
                assert_eq!(input, "defs.json");
                assert!(output.is_none());
                assert_eq!(package, "package.json");
                assert!(overwrite);
                assert_eq!(handler, "src/commands.ts");
                assert!(prefix.is_none());
                assert!(name.is_none());
                assert!(validate);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_short_flags() {
        let cli = Cli::try_parse_from([
            "contribgen",
            "generate",
            "-i",
            "defs.json",
            "-p",
            "package.json",
            "-o",
            "out/package.json",
            "--handler",
            "handlers.ts",
            "--prefix",
            "Git",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                output,
                overwrite,
                prefix,
                ..
            } => {
                assert_eq!(output.as_deref(), Some("out/package.json"));
                assert!(!overwrite);
                assert_eq!(prefix.as_deref(), Some("Git"));
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from([
            "contribgen",
            "validate",
            "--input",
            "defs.json",
            "--package",
            "package.json",
            "--handler",
            "handlers.ts",
            "--name",
            "My Extension",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate { input, name, .. } => {
                assert_eq!(input, "defs.json");
                assert_eq!(name.as_deref(), Some("My Extension"));
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["contribgen"]).is_err());
    }

    #[test]
    fn test_cli_generate_requires_handler() {
        let result = Cli::try_parse_from([
            "contribgen",
            "generate",
            "--input",
            "defs.json",
            "--package",
            "package.json",
        ]);
        assert!(result.is_err());
    }
}
