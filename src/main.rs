use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use kilomode::cli;

#[derive(Parser)]
#[command(name = "kilomode", version)]
#[command(about = "Convert Claude Code sub-agents to Kilo Code modes", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an agent file or a directory of agent files
    Convert {
        /// Input file (.md) or directory containing sub-agent files
        input: String,

        /// Output directory (default: from config, "./kilo-modes")
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Show what would be converted without creating files
        #[arg(long)]
        dry_run: bool,

        /// Write each mode to its own YAML file (directory input only)
        #[arg(long)]
        single_files: bool,

        /// Skip the diagnostic report for directory runs
        #[arg(long)]
        no_report: bool,

        /// Path to config file (defaults to ./kilomode.toml or ~/.config/kilomode/config.toml)
        #[arg(long)]
        config: Option<String>,
    },

    /// Show the inferred mode fields for one agent file
    Inspect {
        file: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Check an agent file's frontmatter for YAML problems
    Check { file: String },

    /// Print shell completions
    Completions { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            dry_run,
            single_files,
            no_report,
            config,
        } => cli::convert::run(cli::convert::ConvertArgs {
            input,
            output,
            dry_run,
            single_files,
            no_report,
            config,
        })?,
        Commands::Inspect { file, json, config } => cli::inspect::run(&file, json, config)?,
        Commands::Check { file } => cli::check::run(&file)?,
        Commands::Completions { shell } => {
            cli::completions::run(shell, &mut Cli::command(), &mut io::stdout())
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_defaults() {
        let cli = Cli::try_parse_from(["kilomode", "convert", "agents/"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Convert {
                input,
                output,
                dry_run,
                single_files,
                no_report,
                config,
            } => {
                assert_eq!(input, "agents/");
                assert!(output.is_none());
                assert!(!dry_run);
                assert!(!single_files);
                assert!(!no_report);
                assert!(config.is_none());
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_convert_flags() {
        let cli = Cli::try_parse_from([
            "kilomode",
            "convert",
            "agents/",
            "-o",
            "out",
            "--dry-run",
            "--single-files",
            "--no-report",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Convert {
                output,
                dry_run,
                single_files,
                no_report,
                ..
            } => {
                assert_eq!(output.as_deref(), Some("out"));
                assert!(dry_run && single_files && no_report);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_requires_input() {
        assert!(Cli::try_parse_from(["kilomode", "convert"]).is_err());
    }

    #[test]
    fn test_parse_inspect_json() {
        let cli = Cli::try_parse_from(["kilomode", "inspect", "a.md", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { file, json, .. } => {
                assert_eq!(file, "a.md");
                assert!(json);
            }
            _ => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_parse_completions_shell() {
        let cli = Cli::try_parse_from(["kilomode", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions { shell: Shell::Zsh }
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
