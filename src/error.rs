use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading and parsing an agent document.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no valid YAML frontmatter found - first line: {first_line:?}")]
    MissingFrontmatter { first_line: String },

    #[error("no closing --- found")]
    UnclosedFrontmatter,

    #[error("YAML parsing failed even after sanitization: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("YAML parsing failed, sanitization also failed: original error: {original}, sanitization error: {sanitize}")]
    Sanitize {
        original: serde_yaml::Error,
        sanitize: String,
    },

    #[error("missing required '{0}' field")]
    MissingField(&'static str),

    #[error("error reading file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Short category used to group failures in the diagnostic report.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::MissingFrontmatter { .. } | ConvertError::UnclosedFrontmatter => {
                "Frontmatter Error"
            }
            ConvertError::Yaml(_) | ConvertError::Sanitize { .. } => "YAML Error",
            ConvertError::MissingField(_) => "Missing Field",
            ConvertError::Read { .. } => "Read Error",
        }
    }

    /// Fix hint shown next to the failure in the report.
    pub fn suggestion(&self) -> &'static str {
        match self {
            ConvertError::MissingFrontmatter { .. } | ConvertError::UnclosedFrontmatter => {
                "Wrap the agent metadata in --- lines at the top of the file"
            }
            ConvertError::Yaml(_) | ConvertError::Sanitize { .. } => {
                "Check YAML frontmatter syntax and required fields"
            }
            ConvertError::MissingField(_) => "Add the missing field to the frontmatter",
            ConvertError::Read { .. } => "Check that the file exists and is readable",
        }
    }
}
