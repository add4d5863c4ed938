//! Keyword-driven inference of mode fields.
//!
//! Every classifier takes the same (name, description, body) triple, owns
//! its keyword tables, and is total: unmatched text falls back to a default
//! rather than failing.

pub mod codicons;
pub mod description;
pub mod groups;
pub mod icon;
pub mod scorer;
pub mod when_to_use;

use serde::Serialize;

use description::{ShortDescriptionGenerator, ShortDescriptionTables};
use groups::{Capability, FileRestriction, GroupClassifier, GroupPreset, GroupRules};
use icon::{IconSelector, IconTables, IconTier};
use when_to_use::{WhenToUseGenerator, WhenToUseTables};

/// The three free-text fields every classifier reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationInput {
    pub name: String,
    pub description: String,
    pub body: String,
}

impl ClassificationInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            body: body.into(),
        }
    }

    /// `name description body`, lower-cased.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.body).to_lowercase()
    }
}

/// Everything inferred for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub icon: String,
    #[serde(skip)]
    pub icon_tier: IconTier,
    /// Generated short description, or the restriction's description when
    /// edits are restricted.
    pub short_description: String,
    #[serde(serialize_with = "serialize_preset")]
    pub group_preset: GroupPreset,
    pub capabilities: Vec<Capability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_restriction: Option<FileRestriction>,
    pub when_to_use: String,
}

fn serialize_preset<S: serde::Serializer>(preset: &GroupPreset, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(preset.name())
}

/// Tables for all classifiers, handed to [`Classifier::new`].
#[derive(Debug, Clone, Default)]
pub struct ClassifierTables {
    pub icons: IconTables,
    pub groups: GroupRules,
    pub when_to_use: WhenToUseTables,
    pub short_descriptions: ShortDescriptionTables,
}

impl ClassifierTables {
    pub fn builtin() -> Self {
        Self::default()
    }
}

/// Bundle of the four classifiers used by the converter.
pub struct Classifier {
    icons: IconSelector,
    groups: GroupClassifier,
    when_to_use: WhenToUseGenerator,
    short_descriptions: ShortDescriptionGenerator,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierTables::builtin())
    }
}

impl Classifier {
    pub fn new(tables: ClassifierTables) -> Self {
        Self {
            icons: IconSelector::new(tables.icons),
            groups: GroupClassifier::new(tables.groups),
            when_to_use: WhenToUseGenerator::new(tables.when_to_use),
            short_descriptions: ShortDescriptionGenerator::new(tables.short_descriptions),
        }
    }

    pub fn icons(&self) -> &IconSelector {
        &self.icons
    }

    pub fn when_to_use(&self) -> &WhenToUseGenerator {
        &self.when_to_use
    }

    pub fn classify(&self, input: &ClassificationInput) -> Classification {
        let icon = self.icons.select(input);
        let groups = self.groups.classify(input);

        let short_description = match &groups.restriction {
            Some(restriction) => restriction.description.clone(),
            None => self.short_descriptions.generate(input),
        };

        Classification {
            icon: icon.icon,
            icon_tier: icon.tier,
            short_description,
            group_preset: groups.preset,
            capabilities: groups.capabilities().to_vec(),
            file_restriction: groups.restriction,
            when_to_use: self.when_to_use.generate(input),
        }
    }
}
