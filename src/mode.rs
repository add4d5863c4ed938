//! Kilo Code custom mode records and their YAML form.

use serde::Serialize;

use crate::classify::groups::{Capability, FileRestriction};

/// One entry of a mode's `groups` list.
///
/// Restricted entries serialize as a two-element sequence, the form Kilo
/// Code expects: `- [edit, {fileRegex: ..., description: ...}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Plain(Capability),
    Restricted(Capability, FileRestriction),
}

impl GroupEntry {
    /// Build the group list, attaching `restriction` to the `edit` token.
    pub fn from_capabilities(
        capabilities: &[Capability],
        restriction: Option<&FileRestriction>,
    ) -> Vec<GroupEntry> {
        capabilities
            .iter()
            .map(|&capability| match restriction {
                Some(r) if capability == Capability::Edit => {
                    GroupEntry::Restricted(capability, r.clone())
                }
                _ => GroupEntry::Plain(capability),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KiloMode {
    pub slug: String,
    pub name: String,
    pub icon_name: String,
    pub role_definition: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub when_to_use: String,
    pub description: String,
    pub groups: Vec<GroupEntry>,
    pub custom_instructions: String,
    pub source: String,
    #[serde(skip)]
    pub original_model: Option<String>,
    #[serde(skip)]
    pub file_restriction: Option<FileRestriction>,
}

/// Root document of a `custom_modes.yaml` file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomModesFile<'a> {
    pub custom_modes: &'a [KiloMode],
}

pub fn render_yaml(modes: &[KiloMode]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&CustomModesFile {
        custom_modes: modes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mode(restriction: Option<FileRestriction>) -> KiloMode {
        let capabilities = [Capability::Read, Capability::Edit, Capability::Command];
        KiloMode {
            slug: "backend-dev".to_string(),
            name: "Backend Dev".to_string(),
            icon_name: "codicon-server".to_string(),
            role_definition: "Builds APIs".to_string(),
            when_to_use: "Use this mode for backend work.".to_string(),
            description: "Backend development".to_string(),
            groups: GroupEntry::from_capabilities(&capabilities, restriction.as_ref()),
            custom_instructions: "Line one\nLine two".to_string(),
            source: "project".to_string(),
            original_model: Some("sonnet".to_string()),
            file_restriction: restriction,
        }
    }

    #[test]
    fn test_render_uses_camel_case_keys() {
        let yaml = render_yaml(&[sample_mode(None)]).unwrap();
        assert!(yaml.starts_with("customModes:"));
        for key in [
            "slug:",
            "iconName:",
            "roleDefinition:",
            "whenToUse:",
            "customInstructions:",
            "source: project",
        ] {
            assert!(yaml.contains(key), "missing {} in:\n{}", key, yaml);
        }
        assert!(!yaml.contains("original_model"));
        assert!(!yaml.contains("originalModel"));
    }

    #[test]
    fn test_plain_groups_are_tokens() {
        let yaml = render_yaml(&[sample_mode(None)]).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let groups = &value["customModes"][0]["groups"];
        assert_eq!(groups[0], serde_yaml::Value::from("read"));
        assert_eq!(groups[1], serde_yaml::Value::from("edit"));
        assert_eq!(groups[2], serde_yaml::Value::from("command"));
    }

    #[test]
    fn test_restricted_edit_group() {
        let yaml = render_yaml(&[sample_mode(Some(FileRestriction::markdown_only()))]).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let edit = &value["customModes"][0]["groups"][1];
        assert_eq!(edit[0], serde_yaml::Value::from("edit"));
        assert_eq!(edit[1]["fileRegex"], serde_yaml::Value::from("\\.md$"));
        assert_eq!(
            edit[1]["description"],
            serde_yaml::Value::from("Markdown files only")
        );
        // other tokens stay plain
        assert_eq!(
            value["customModes"][0]["groups"][0],
            serde_yaml::Value::from("read")
        );
    }

    #[test]
    fn test_empty_when_to_use_is_omitted() {
        let mut mode = sample_mode(None);
        mode.when_to_use.clear();
        let yaml = render_yaml(&[mode]).unwrap();
        assert!(!yaml.contains("whenToUse"));
    }

    #[test]
    fn test_multiline_instructions_survive() {
        let yaml = render_yaml(&[sample_mode(None)]).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            value["customModes"][0]["customInstructions"],
            serde_yaml::Value::from("Line one\nLine two")
        );
    }
}
