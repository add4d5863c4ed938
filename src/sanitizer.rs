//! Repairs for common frontmatter mistakes in hand-written agent files.
//!
//! Two patterns break strict YAML parsing in practice: a `tools:` line written
//! as a bare comma-separated list, and very long `description:` values full of
//! quotes and embedded `<example>` transcripts.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::agent::AgentSpec;

/// Descriptions at least this long are candidates for rewriting.
const LONG_DESCRIPTION_CHARS: usize = 200;
/// Quoted descriptions longer than this always become literal blocks.
const LITERAL_BLOCK_BYTES: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlIssue {
    /// 1-based line number within the frontmatter.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for YamlIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

static LONG_DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(\s*description:\s*)(.{{{},}}.*)$",
        LONG_DESCRIPTION_CHARS
    ))
    .expect("long description regex")
});

static TOOLS_STRING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*tools:\s*)([^\[\]]+(?:,\s*[^\[\]]+)+)\s*$").expect("tools string regex")
});

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlSanitizer;

impl YamlSanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Rewrite problematic lines and check that the result parses.
    pub fn sanitize_frontmatter(&self, yaml: &str) -> Result<String, serde_yaml::Error> {
        let sanitized = yaml
            .split('\n')
            .map(|line| self.sanitize_line(line))
            .collect::<Vec<_>>()
            .join("\n");

        serde_yaml::from_str::<AgentSpec>(&sanitized)?;
        Ok(sanitized)
    }

    fn sanitize_line(&self, line: &str) -> String {
        if let Some(caps) = TOOLS_STRING_RE.captures(line) {
            let key = &caps[1];
            let tools: Vec<&str> = caps[2].trim().split(',').map(str::trim).collect();
            debug!("sanitizer: tools string -> array ({} entries)", tools.len());
            return format!("{}[{}]", key, tools.join(", "));
        }

        if let Some(caps) = LONG_DESCRIPTION_RE.captures(line) {
            let key = &caps[1];
            let value = caps[2].trim();

            if needs_literal_block(value) {
                debug!("sanitizer: description -> literal block");
                let body = split_description(value)
                    .lines()
                    .map(|l| format!("  {}", l))
                    .collect::<Vec<_>>()
                    .join("\n");
                return format!("{}|\n{}", key, body);
            }

            debug!("sanitizer: quoting description");
            let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
            return format!("{}\"{}\"", key, escaped);
        }

        line.to_string()
    }

    /// List lines that would need sanitizing, without changing anything.
    pub fn detect_issues(&self, yaml: &str) -> Vec<YamlIssue> {
        let mut issues = Vec::new();

        for (i, line) in yaml.split('\n').enumerate() {
            if LONG_DESCRIPTION_RE.is_match(line) {
                issues.push(YamlIssue {
                    line: i + 1,
                    message: "Long description with potential quote issues".to_string(),
                });
            }
            if TOOLS_STRING_RE.is_match(line) {
                issues.push(YamlIssue {
                    line: i + 1,
                    message: "Tools field as string instead of array".to_string(),
                });
            }
        }

        issues
    }
}

fn needs_literal_block(value: &str) -> bool {
    value.contains('"')
        && (value.contains("<example>")
            || value.contains("Context:")
            || value.len() > LITERAL_BLOCK_BYTES)
}

/// Put embedded example transcripts on their own lines.
fn split_description(desc: &str) -> String {
    let mut desc = desc
        .replace(" <example>", "\n\n<example>")
        .replace("</example> ", "</example>\n\n")
        .replace(" Examples:", "\n\nExamples:")
        .replace("Context: ", "\nContext: ")
        .replace("user: ", "\nuser: ")
        .replace("assistant: ", "\nassistant: ")
        .replace("<commentary>", "\n<commentary>")
        .replace("</commentary>", "\n</commentary>");

    while desc.contains("\n\n\n") {
        desc = desc.replace("\n\n\n", "\n\n");
    }

    desc.trim().to_string()
}
