//! Writing mode files to disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::mode::{render_yaml, KiloMode};

/// Directory name whose sub-tree is mirrored for single-file conversions.
pub const AGENTS_DIR: &str = "claude-agents";

/// Write `modes` as one `customModes` document at `output_dir/file_name`.
pub fn save_modes(modes: &[KiloMode], output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;

    let yaml = render_yaml(modes).context("failed to marshal YAML")?;
    let output_file = output_dir.join(file_name);
    fs::write(&output_file, yaml)
        .with_context(|| format!("failed to write YAML file {}", output_file.display()))?;

    debug!("wrote {} mode(s) to {}", modes.len(), output_file.display());
    Ok(output_file)
}

/// Write a single mode as `output_dir/<slug>.yaml`.
pub fn save_single(mode: &KiloMode, output_dir: &Path) -> Result<PathBuf> {
    save_modes(
        std::slice::from_ref(mode),
        output_dir,
        &format!("{}.yaml", mode.slug),
    )
}

/// Write a single mode under `output_dir`, mirroring where `input_path`
/// sits below `input_dir`.
pub fn save_single_mirrored(
    mode: &KiloMode,
    input_path: &Path,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let rel = input_path.strip_prefix(input_dir).with_context(|| {
        format!(
            "failed to calculate relative path of {} in {}",
            input_path.display(),
            input_dir.display()
        )
    })?;

    let target_dir = match rel.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => output_dir.join(parent),
        _ => output_dir.to_path_buf(),
    };
    save_single(mode, &target_dir)
}

/// Output path, relative to the output directory, for converting one file.
///
/// Files below a `claude-agents` directory keep their sub-path; anything
/// else becomes `<basename>.yaml`.
pub fn single_file_output_path(input_file: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}.yaml", stem);

    let absolute = std::path::absolute(input_file).unwrap_or_else(|_| input_file.to_path_buf());
    let components: Vec<Component<'_>> = absolute.components().collect();

    let anchor = components
        .iter()
        .position(|c| c.as_os_str() == AGENTS_DIR);

    match anchor {
        Some(i) if i + 1 < components.len() => {
            let mut rel: PathBuf = components[i + 1..components.len() - 1].iter().collect();
            rel.push(file_name);
            rel
        }
        _ => PathBuf::from(file_name),
    }
}

/// Convert-and-save target for one input file: the mode goes to
/// `output_dir/single_file_output_path(input_file)`.
pub fn save_for_input(mode: &KiloMode, input_file: &Path, output_dir: &Path) -> Result<PathBuf> {
    let rel = single_file_output_path(input_file);
    let target_dir = match rel.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => output_dir.join(parent),
        _ => output_dir.to_path_buf(),
    };
    let file_name = rel
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("{}.yaml", mode.slug));
    save_modes(std::slice::from_ref(mode), &target_dir, &file_name)
}
