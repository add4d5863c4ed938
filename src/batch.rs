//! Directory conversion.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::convert::Converter;
use crate::mode::KiloMode;
use crate::report::{DiagnosticReport, FileIssue};
use crate::writer;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub combined_file: String,
    pub dry_run: bool,
    pub single_files: bool,
    /// File name skipped during the walk, so a previous report is not
    /// mistaken for an agent.
    pub report_file: Option<String>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./kilo-modes"),
            combined_file: "custom_modes.yaml".to_string(),
            dry_run: false,
            single_files: false,
            report_file: None,
        }
    }
}

/// What happened to one `.md` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Converted {
        file_name: String,
        slug: String,
        /// Written file, in single-file mode outside dry runs.
        output: Option<PathBuf>,
    },
    Failed {
        file_name: String,
        error: String,
    },
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub sanitized: usize,
    pub issues: Vec<FileIssue>,
    pub outcomes: Vec<FileOutcome>,
    pub modes: Vec<KiloMode>,
    /// Combined output file, when one was written.
    pub combined_output: Option<PathBuf>,
}

impl BatchSummary {
    pub fn failed(&self) -> usize {
        self.total - self.successful
    }

    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport::new(
            self.total,
            self.successful,
            self.sanitized,
            self.issues.clone(),
        )
    }
}

/// `.md` files below `dir`, sorted by path.
pub fn collect_agent_files(dir: &Path, skip: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.to_lowercase().ends_with(".md") {
            continue;
        }
        if skip.is_some_and(|s| s == name) {
            debug!("skipping {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

/// Convert every agent file below `input_dir`.
///
/// Per-file failures are recorded in the summary; only walk and final
/// write failures are returned as errors.
pub fn convert_directory(
    converter: &Converter,
    input_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in collect_agent_files(input_dir, options.report_file.as_deref())? {
        summary.total += 1;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let rel_path = path
            .strip_prefix(input_dir)
            .unwrap_or(&path)
            .display()
            .to_string();

        let conversion = match converter.convert_file(&path) {
            Ok(conversion) => conversion,
            Err(e) => {
                warn!("failed to convert {}: {}", rel_path, e);
                summary.issues.push(FileIssue {
                    file_path: rel_path,
                    issue_type: e.kind().to_string(),
                    description: e.to_string(),
                    suggestion: e.suggestion().to_string(),
                });
                summary.outcomes.push(FileOutcome::Failed {
                    file_name,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if conversion.sanitized {
            summary.sanitized += 1;
        }

        let mut output = None;
        if options.single_files && !options.dry_run {
            match writer::save_single_mirrored(
                &conversion.mode,
                &path,
                input_dir,
                &options.output_dir,
            ) {
                Ok(written) => output = Some(written),
                Err(e) => {
                    warn!("failed to save {}: {:#}", conversion.mode.slug, e);
                    summary.issues.push(FileIssue {
                        file_path: rel_path,
                        issue_type: "Write Error".to_string(),
                        description: format!("{:#}", e),
                        suggestion: "Check that the output directory is writable".to_string(),
                    });
                    summary.outcomes.push(FileOutcome::Failed {
                        file_name,
                        error: format!("{:#}", e),
                    });
                    continue;
                }
            }
        }

        summary.successful += 1;
        summary.outcomes.push(FileOutcome::Converted {
            file_name,
            slug: conversion.mode.slug.clone(),
            output,
        });
        summary.modes.push(conversion.mode);
    }

    info!(
        "converted {}/{} agent files ({} sanitized)",
        summary.successful, summary.total, summary.sanitized
    );

    if !options.dry_run && !options.single_files && !summary.modes.is_empty() {
        let written = writer::save_modes(
            &summary.modes,
            &options.output_dir,
            &options.combined_file,
        )
        .context("failed to save modes")?;
        summary.combined_output = Some(written);
    }

    Ok(summary)
}
