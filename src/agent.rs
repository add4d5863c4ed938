//! Claude Code sub-agent documents: YAML frontmatter followed by a markdown
//! body holding the agent's instructions.

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::classify::ClassificationInput;
use crate::error::ConvertError;
use crate::sanitizer::YamlSanitizer;

/// Frontmatter fields of a sub-agent file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgentSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub tools: Vec<String>,
}

/// Accept `tools: [A, B]`, `tools: A, B` and an empty `tools:`.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tools {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Option::<Tools>::deserialize(deserializer)? {
        Some(Tools::List(tools)) => tools,
        Some(Tools::Csv(csv)) => csv
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}

/// A parsed agent with its required fields checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub description: String,
    pub model: Option<String>,
    pub tools: Vec<String>,
    /// Markdown after the frontmatter, trimmed.
    pub body: String,
}

impl Agent {
    pub fn classification_input(&self) -> ClassificationInput {
        ClassificationInput::new(&self.name, &self.description, &self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAgent {
    pub agent: Agent,
    /// The frontmatter only parsed after sanitizing.
    pub sanitized: bool,
}

/// Split a document into raw frontmatter and body.
pub fn split_frontmatter(content: &str) -> Result<(String, String), ConvertError> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.trim().split('\n').collect();

    if lines.len() < 3 || lines[0] != "---" {
        return Err(ConvertError::MissingFrontmatter {
            first_line: lines[0].to_string(),
        });
    }

    let end = lines
        .iter()
        .skip(1)
        .position(|line| *line == "---")
        .map(|i| i + 1)
        .ok_or(ConvertError::UnclosedFrontmatter)?;

    let frontmatter = lines[1..end].join("\n");
    let body = lines[end + 1..].join("\n").trim().to_string();
    Ok((frontmatter, body))
}

/// Parse an agent document, sanitizing the frontmatter if strict parsing fails.
pub fn parse_agent(content: &str, sanitizer: &YamlSanitizer) -> Result<ParsedAgent, ConvertError> {
    let (frontmatter, body) = split_frontmatter(content)?;

    let (spec, sanitized) = match serde_yaml::from_str::<Option<AgentSpec>>(&frontmatter) {
        Ok(spec) => (spec.unwrap_or_default(), false),
        Err(original) => {
            let fixed = sanitizer
                .sanitize_frontmatter(&frontmatter)
                .map_err(|e| ConvertError::Sanitize {
                    original,
                    sanitize: e.to_string(),
                })?;
            let spec = serde_yaml::from_str::<Option<AgentSpec>>(&fixed)?;
            warn!("Applied YAML sanitization");
            (spec.unwrap_or_default(), true)
        }
    };

    let name = non_empty(spec.name).ok_or(ConvertError::MissingField("name"))?;
    let description = non_empty(spec.description).ok_or(ConvertError::MissingField("description"))?;

    Ok(ParsedAgent {
        agent: Agent {
            name,
            description,
            model: non_empty(spec.model),
            tools: spec.tools,
            body,
        },
        sanitized,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ParsedAgent, ConvertError> {
        parse_agent(content, &YamlSanitizer::new())
    }

    #[test]
    fn test_parse_valid_document() {
        let parsed = parse("---\nname: test-agent\ndescription: test desc\nmodel: opus\n---\nSome markdown content.")
            .unwrap();
        assert_eq!(parsed.agent.name, "test-agent");
        assert_eq!(parsed.agent.description, "test desc");
        assert_eq!(parsed.agent.model.as_deref(), Some("opus"));
        assert_eq!(parsed.agent.body, "Some markdown content.");
        assert!(!parsed.sanitized);
    }

    #[test]
    fn test_parse_normalizes_line_endings() {
        let parsed = parse("---\r\nname: a\r\ndescription: b\r\n---\r\n\r\nBody line\r\n").unwrap();
        assert_eq!(parsed.agent.body, "Body line");
    }

    #[test]
    fn test_missing_description_is_rejected() {
        let err = parse("---\nname: test-agent\n---\nNo desc.").unwrap_err();
        assert!(matches!(err, ConvertError::MissingField("description")));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = parse("---\nname: \"\"\ndescription: d\n---\n").unwrap_err();
        assert!(matches!(err, ConvertError::MissingField("name")));
    }

    #[test]
    fn test_missing_frontmatter() {
        let err = parse("# Just markdown\n\nno frontmatter\n").unwrap_err();
        assert!(matches!(err, ConvertError::MissingFrontmatter { .. }));
        assert!(err.to_string().contains("# Just markdown"));
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let err = parse("---\nname: a\ndescription: b\n").unwrap_err();
        assert!(matches!(err, ConvertError::UnclosedFrontmatter));
    }

    #[test]
    fn test_tools_as_list_and_csv() {
        let list = parse("---\nname: a\ndescription: b\ntools: [Read, Bash]\n---\n").unwrap();
        assert_eq!(list.agent.tools, vec!["Read", "Bash"]);

        let csv = parse("---\nname: a\ndescription: b\ntools: Read, Grep, Glob\n---\n").unwrap();
        assert_eq!(csv.agent.tools, vec!["Read", "Grep", "Glob"]);
        assert!(!csv.sanitized);
    }

    #[test]
    fn test_broken_yaml_is_sanitized() {
        let description = format!(
            "Use this agent to review code. <example>Context: the user says \"check this\" assistant: \"sure\"</example> {}",
            "more ".repeat(50)
        );
        let doc = format!("---\nname: code-reviewer\ndescription: {}\n---\nBody", description);
        let parsed = parse(&doc).unwrap();
        assert!(parsed.sanitized);
        assert_eq!(parsed.agent.name, "code-reviewer");
        assert!(parsed.agent.description.contains("<example>"));
    }

    #[test]
    fn test_unfixable_yaml_is_an_error() {
        let err = parse("---\nname: [oops\ndescription: d\n---\n").unwrap_err();
        assert!(matches!(err, ConvertError::Sanitize { .. }));
    }

    #[test]
    fn test_body_may_be_empty() {
        let parsed = parse("---\nname: a\ndescription: b\n---").unwrap();
        assert_eq!(parsed.agent.body, "");
    }
}
