use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::warn;

use crate::batch::{convert_directory, BatchOptions, BatchSummary, FileOutcome};
use crate::config::Config;
use crate::convert::Converter;
use crate::writer;

#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub input: String,
    pub output: Option<String>,
    pub dry_run: bool,
    pub single_files: bool,
    pub no_report: bool,
    pub config: Option<String>,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let config = Config::load_with_path(args.config.clone())?;
    let input = Path::new(&args.input);
    if !input.exists() {
        bail!("Input path '{}' does not exist", args.input);
    }

    let output_dir = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.output.dir.clone());
    let converter = Converter::from_config(&config);

    if input.is_dir() {
        run_directory(&converter, &config, &args, input, output_dir)
    } else {
        run_file(&converter, &config, &args, input, &output_dir)
    }
}

fn run_file(
    converter: &Converter,
    config: &Config,
    args: &ConvertArgs,
    input: &Path,
    output_dir: &Path,
) -> Result<()> {
    if !args.input.to_lowercase().ends_with(".md") {
        bail!("Input file must have .md extension");
    }

    let conversion = converter.convert_file(input)?;
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if args.dry_run {
        let rel = writer::single_file_output_path(input);
        println!("Would convert {} to:", file_name);
        println!("  - {} (in {})", conversion.mode.slug, rel.display());
    } else {
        let written = writer::save_for_input(&conversion.mode, input, output_dir)?;
        println!("✓ Converted {}", file_name);
        println!("  → {}", written.display());
    }

    if let Some(model) = &conversion.mode.original_model {
        match config.map_model(model) {
            Some(mapped) => println!("  model: {} → {}", model, mapped),
            None => println!("  model: {} (no mapping)", model),
        }
    }

    Ok(())
}

fn run_directory(
    converter: &Converter,
    config: &Config,
    args: &ConvertArgs,
    input: &Path,
    output_dir: PathBuf,
) -> Result<()> {
    let write_report = config.report.enabled && !args.no_report;
    let options = BatchOptions {
        output_dir,
        combined_file: config.output.combined_file.clone(),
        dry_run: args.dry_run,
        single_files: args.single_files || config.output.single_files,
        report_file: Some(config.report.file_name.clone()),
    };

    if options.dry_run {
        println!("Dry run mode - showing what would be converted:");
    }

    let summary = convert_directory(converter, input, &options)?;
    print_outcomes(&summary, &options);

    if write_report {
        match summary.report().write(input, &config.report.file_name) {
            Ok(path) => println!("\n📊 Diagnostic report saved to: {}", path.display()),
            Err(e) => warn!("Failed to generate diagnostic report: {:#}", e),
        }
    }

    print_summary(&summary, &options);
    Ok(())
}

fn print_outcomes(summary: &BatchSummary, options: &BatchOptions) {
    for outcome in &summary.outcomes {
        match outcome {
            FileOutcome::Converted {
                file_name, slug, ..
            } if options.dry_run => {
                let target = if options.single_files {
                    format!("{}.yaml", slug)
                } else {
                    options.combined_file.clone()
                };
                println!("  ✓ {} → {} (in {})", file_name, slug, target);
            }
            FileOutcome::Converted {
                file_name,
                output: Some(path),
                ..
            } => println!("✓ Converted {} → {}", file_name, path.display()),
            FileOutcome::Converted {
                file_name, slug, ..
            } => println!("✓ Converted {} → {}", file_name, slug),
            FileOutcome::Failed { file_name, error } if options.dry_run => {
                println!("  ✗ {} → Error: {}", file_name, error)
            }
            FileOutcome::Failed { file_name, error } => {
                println!("✗ Failed to convert {}: {}", file_name, error)
            }
        }
    }
}

fn print_summary(summary: &BatchSummary, options: &BatchOptions) {
    if options.dry_run {
        let target = if options.single_files {
            "individual YAML files".to_string()
        } else {
            options.combined_file.clone()
        };
        println!("Would convert {} files to {}", summary.successful, target);
        if summary.sanitized > 0 {
            println!(
                "Note: {} files would require YAML sanitization",
                summary.sanitized
            );
        }
        return;
    }

    if summary.successful == 0 {
        println!("\nNo agent files converted ({} found)", summary.total);
        return;
    }

    println!(
        "\nConversion complete: {}/{} files converted successfully",
        summary.successful, summary.total
    );
    if summary.sanitized > 0 {
        println!("YAML sanitization applied to {} files", summary.sanitized);
    }
    match &summary.combined_output {
        Some(path) => println!("Output file: {}", path.display()),
        None => println!("Output directory: {}", options.output_dir.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use serial_test::serial;
    use tempfile::TempDir;

    const AGENT: &str = "---\nname: backend-dev\ndescription: Builds REST APIs\nmodel: sonnet\n---\nBody";

    fn args(input: &Path, output: &Path) -> ConvertArgs {
        ConvertArgs {
            input: input.to_string_lossy().to_string(),
            output: Some(output.to_string_lossy().to_string()),
            ..ConvertArgs::default()
        }
    }

    #[test]
    #[serial]
    fn test_missing_input() {
        let err = run(ConvertArgs {
            input: "/nonexistent/kilomode-input".to_string(),
            ..ConvertArgs::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    #[serial]
    fn test_file_must_be_markdown() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("agent.txt");
        fs::write(&input, AGENT).unwrap();
        let err = run(args(&input, &dir.path().join("out"))).unwrap_err();
        assert!(err.to_string().contains(".md extension"));
    }

    #[test]
    #[serial]
    fn test_single_file_conversion() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("backend.md");
        let out = dir.path().join("out");
        fs::write(&input, AGENT).unwrap();

        run(args(&input, &out)).unwrap();
        let written = fs::read_to_string(out.join("backend.yaml")).unwrap();
        assert!(written.contains("slug: backend-dev"));
    }

    #[test]
    #[serial]
    fn test_single_file_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("backend.md");
        let out = dir.path().join("out");
        fs::write(&input, AGENT).unwrap();

        run(ConvertArgs {
            dry_run: true,
            ..args(&input, &out)
        })
        .unwrap();
        assert!(!out.exists());
    }

    #[test]
    #[serial]
    fn test_directory_conversion_writes_report() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("agents");
        let out = dir.path().join("out");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("backend.md"), AGENT).unwrap();

        run(args(&input, &out)).unwrap();
        assert!(out.join("custom_modes.yaml").exists());
        assert!(input.join("conversion-diagnostic-report.md").exists());
    }

    #[test]
    #[serial]
    fn test_directory_conversion_no_report() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("agents");
        let out = dir.path().join("out");
        fs::create_dir_all(&input).unwrap();
        fs::write(input.join("backend.md"), AGENT).unwrap();

        run(ConvertArgs {
            no_report: true,
            ..args(&input, &out)
        })
        .unwrap();
        assert!(!input.join("conversion-diagnostic-report.md").exists());
    }
}
