//! Capability group assignment.
//!
//! An ordered rule chain evaluated over the lower-cased combined text; the
//! first rule whose condition holds selects its preset wholesale.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::ClassificationInput;

/// Permission tokens a mode can be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Read,
    Edit,
    Browser,
    Command,
    Mcp,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Read => "read",
            Capability::Edit => "edit",
            Capability::Browser => "browser",
            Capability::Command => "command",
            Capability::Mcp => "mcp",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named, fixed bundle of capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPreset {
    Review,
    Architect,
    Web,
    System,
    Full,
    Default,
}

impl GroupPreset {
    pub fn name(&self) -> &'static str {
        match self {
            GroupPreset::Review => "review",
            GroupPreset::Architect => "architect",
            GroupPreset::Web => "web",
            GroupPreset::System => "system",
            GroupPreset::Full => "full",
            GroupPreset::Default => "default",
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        use Capability::*;
        match self {
            GroupPreset::Review | GroupPreset::Architect => &[Read, Edit],
            GroupPreset::Web | GroupPreset::Default => &[Read, Edit, Browser, Command],
            GroupPreset::System => &[Read, Edit, Command],
            GroupPreset::Full => &[Read, Edit, Browser, Command, Mcp],
        }
    }
}

impl fmt::Display for GroupPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Condition over the combined lower-cased text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// At least one keyword is present.
    AnyOf(Vec<String>),
    /// Every keyword is present.
    AllOf(Vec<String>),
    /// At least one of `any` and none of `none`.
    AnyExcept { any: Vec<String>, none: Vec<String> },
}

fn words(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|w| w.to_string()).collect()
}

impl Condition {
    pub fn any_of(raw: &[&str]) -> Self {
        Condition::AnyOf(words(raw))
    }

    pub fn all_of(raw: &[&str]) -> Self {
        Condition::AllOf(words(raw))
    }

    pub fn any_except(any: &[&str], none: &[&str]) -> Self {
        Condition::AnyExcept {
            any: words(any),
            none: words(none),
        }
    }

    pub fn holds(&self, text: &str) -> bool {
        match self {
            Condition::AnyOf(keywords) => keywords.iter().any(|k| text.contains(k.as_str())),
            Condition::AllOf(keywords) => keywords.iter().all(|k| text.contains(k.as_str())),
            Condition::AnyExcept { any, none } => {
                any.iter().any(|k| text.contains(k.as_str()))
                    && !none.iter().any(|k| text.contains(k.as_str()))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupRule {
    pub condition: Condition,
    pub preset: GroupPreset,
}

/// Edit restriction attached to a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRestriction {
    #[serde(rename = "fileRegex")]
    pub file_regex: String,
    pub description: String,
}

impl FileRestriction {
    pub fn markdown_only() -> Self {
        Self {
            file_regex: r"\.md$".to_string(),
            description: "Markdown files only".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment {
    pub preset: GroupPreset,
    pub restriction: Option<FileRestriction>,
}

impl GroupAssignment {
    pub fn capabilities(&self) -> &'static [Capability] {
        self.preset.capabilities()
    }
}

#[derive(Debug, Clone)]
pub struct GroupRules {
    pub rules: Vec<GroupRule>,
    pub fallback: GroupPreset,
    /// When this holds, edits are limited to `restriction`.
    pub restriction_condition: Condition,
    pub restriction: FileRestriction,
}

impl GroupRules {
    pub fn builtin() -> Self {
        let rules = vec![
            GroupRule {
                condition: Condition::any_except(&["review", "reviewer", "audit"], &["architect"]),
                preset: GroupPreset::Review,
            },
            GroupRule {
                condition: Condition::all_of(&["architect", "review"]),
                preset: GroupPreset::Architect,
            },
            GroupRule {
                condition: Condition::any_of(&["frontend", "react", "ui", "css", "html", "web"]),
                preset: GroupPreset::Web,
            },
            GroupRule {
                condition: Condition::any_of(&[
                    "backend",
                    "api",
                    "server",
                    "database",
                    "devops",
                    "deploy",
                    "infrastructure",
                    "cloud",
                    "system",
                ]),
                preset: GroupPreset::System,
            },
            GroupRule {
                condition: Condition::any_of(&[
                    "ai",
                    "llm",
                    "ml",
                    "data",
                    "analytics",
                    "engineer",
                    "rag",
                    "vector",
                    "embedding",
                ]),
                preset: GroupPreset::Full,
            },
        ];

        Self {
            rules,
            fallback: GroupPreset::Default,
            restriction_condition: Condition::all_of(&["architect", "review"]),
            restriction: FileRestriction::markdown_only(),
        }
    }
}

impl Default for GroupRules {
    fn default() -> Self {
        Self::builtin()
    }
}

pub struct GroupClassifier {
    rules: GroupRules,
}

impl Default for GroupClassifier {
    fn default() -> Self {
        Self::new(GroupRules::builtin())
    }
}

impl GroupClassifier {
    pub fn new(rules: GroupRules) -> Self {
        Self { rules }
    }

    pub fn classify(&self, input: &ClassificationInput) -> GroupAssignment {
        let text = input.combined_text();
        GroupAssignment {
            preset: self.preset_for_text(&text),
            restriction: self.restriction_for_text(&text),
        }
    }

    fn preset_for_text(&self, text: &str) -> GroupPreset {
        let preset = self
            .rules
            .rules
            .iter()
            .find(|rule| rule.condition.holds(text))
            .map(|rule| rule.preset)
            .unwrap_or(self.rules.fallback);
        debug!("groups: preset '{}'", preset);
        preset
    }

    fn restriction_for_text(&self, text: &str) -> Option<FileRestriction> {
        self.rules
            .restriction_condition
            .holds(text)
            .then(|| self.rules.restriction.clone())
    }
}
