use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::agent::{parse_agent, Agent};
use crate::classify::{Classification, Classifier};
use crate::config::Config;
use crate::error::ConvertError;
use crate::mode::{GroupEntry, KiloMode};
use crate::sanitizer::YamlSanitizer;

static SLUG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex"));

/// Result of converting one agent document.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub agent: Agent,
    pub classification: Classification,
    pub mode: KiloMode,
    pub sanitized: bool,
}

/// Turns agent documents into Kilo modes.
pub struct Converter {
    classifier: Classifier,
    sanitizer: YamlSanitizer,
    source: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Classifier::default(), "project")
    }
}

impl Converter {
    pub fn new(classifier: Classifier, source: impl Into<String>) -> Self {
        Self {
            classifier,
            sanitizer: YamlSanitizer::new(),
            source: source.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Classifier::default(), config.output.source.clone())
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn sanitizer(&self) -> &YamlSanitizer {
        &self.sanitizer
    }

    /// Lower-case, collapse runs of anything outside `[a-z0-9]` to `-`.
    pub fn generate_slug(&self, name: &str) -> String {
        SLUG_RE
            .replace_all(&name.to_lowercase(), "-")
            .trim_matches('-')
            .to_string()
    }

    pub fn convert_str(&self, content: &str) -> Result<Conversion, ConvertError> {
        let parsed = parse_agent(content, &self.sanitizer)?;
        let agent = parsed.agent;

        let classification = self.classifier.classify(&agent.classification_input());
        debug!(
            "classified {}: icon={} ({}), groups={}",
            agent.name,
            classification.icon,
            classification.icon_tier,
            classification.group_preset.name()
        );

        let mode = KiloMode {
            slug: self.generate_slug(&agent.name),
            name: format_name(&agent.name),
            icon_name: classification.icon.clone(),
            role_definition: agent.description.clone(),
            when_to_use: classification.when_to_use.clone(),
            description: classification.short_description.clone(),
            groups: GroupEntry::from_capabilities(
                &classification.capabilities,
                classification.file_restriction.as_ref(),
            ),
            custom_instructions: agent.body.clone(),
            source: self.source.clone(),
            original_model: agent.model.clone(),
            file_restriction: classification.file_restriction.clone(),
        };

        Ok(Conversion {
            agent,
            classification,
            mode,
            sanitized: parsed.sanitized,
        })
    }

    pub fn convert_file(&self, path: &Path) -> Result<Conversion, ConvertError> {
        let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.convert_str(&content)
    }
}

/// `code-reviewer` -> `Code Reviewer`.
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    let mut word: String = first.to_uppercase().collect();
                    word.push_str(&chars.as_str().to_lowercase());
                    word
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
