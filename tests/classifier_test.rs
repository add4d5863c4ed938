//! Properties of the keyword classifiers, exercised through the public API.

use kilomode::classify::codicons::CODICONS;
use kilomode::classify::groups::{Capability, GroupPreset};
use kilomode::classify::icon::IconTier;
use kilomode::classify::scorer::{best_match, PatternTable};
use kilomode::classify::{ClassificationInput, Classifier};

fn inputs() -> Vec<ClassificationInput> {
    vec![
        ClassificationInput::default(),
        ClassificationInput::new("architect", "", ""),
        ClassificationInput::new("cloud-architect", "AWS and Terraform", ""),
        ClassificationInput::new("python-pro", "Idiomatic Python", "pytest, asyncio"),
        ClassificationInput::new("xyz", "qwerty", "zxcvb"),
        ClassificationInput::new("Legal_Advisor", "Drafts privacy policies", "GDPR"),
        ClassificationInput::new(
            "incident-responder",
            "Handles production incidents. Use PROACTIVELY for outages.",
            "",
        ),
        ClassificationInput::new("", "", "kubernetes docker terraform helm"),
    ]
}

#[test]
fn test_icon_is_always_a_known_codicon() {
    let classifier = Classifier::default();
    for input in inputs() {
        let icon = classifier.icons().select_icon(&input);
        assert!(classifier.icons().is_valid(&icon), "{} not valid", icon);
        assert!(CODICONS.contains(&icon.as_str()), "{} not a codicon", icon);
    }
}

#[test]
fn test_capabilities_are_never_empty() {
    let classifier = Classifier::default();
    let vocabulary = [
        Capability::Read,
        Capability::Edit,
        Capability::Browser,
        Capability::Command,
        Capability::Mcp,
    ];
    for input in inputs() {
        let result = classifier.classify(&input);
        assert!(!result.capabilities.is_empty());
        assert!(result.capabilities.iter().all(|c| vocabulary.contains(c)));
        assert_eq!(result.capabilities[0], Capability::Read);
    }
}

#[test]
fn test_generated_text_is_never_empty() {
    let classifier = Classifier::default();
    for input in inputs() {
        let result = classifier.classify(&input);
        assert!(!result.when_to_use.is_empty());
        assert!(result.when_to_use.ends_with('.'));
        assert!(!result.short_description.is_empty());
    }
}

#[test]
fn test_classification_is_idempotent() {
    let classifier = Classifier::default();
    for input in inputs() {
        assert_eq!(classifier.classify(&input), classifier.classify(&input));
    }
}

#[test]
fn test_architect_name_wins_over_other_text() {
    let classifier = Classifier::default();
    let input = ClassificationInput::new(
        "architect",
        "react frontend database security testing",
        "kubernetes kubernetes kubernetes",
    );
    let choice = classifier.icons().select(&input);
    assert_eq!(choice.icon, "codicon-type-hierarchy-sub");
    assert_eq!(choice.tier, IconTier::ExactRole);
}

#[test]
fn test_empty_input_gets_default_icon() {
    let classifier = Classifier::default();
    let choice = classifier.icons().select(&ClassificationInput::default());
    assert_eq!(choice.icon, "codicon-gear");
    assert_eq!(choice.tier, IconTier::Default);
}

#[test]
fn test_proactive_clause_drives_when_to_use() {
    let classifier = Classifier::default();
    let input = ClassificationInput::new(
        "helper",
        "Use PROACTIVELY for code review and analysis.",
        "",
    );
    let when = classifier.when_to_use().generate(&input);
    assert!(when.starts_with("Use this mode when you need code review and analysis"));
}

#[test]
fn test_architect_review_gets_markdown_restriction() {
    let classifier = Classifier::default();
    let result = classifier.classify(&ClassificationInput::new(
        "system-designer",
        "An architect who will review designs",
        "",
    ));
    assert_eq!(result.group_preset, GroupPreset::Architect);
    assert_eq!(result.capabilities, vec![Capability::Read, Capability::Edit]);
    let restriction = result.file_restriction.expect("restriction");
    assert_eq!(restriction.file_regex, r"\.md$");
    assert_eq!(result.short_description, "Markdown files only");
}

#[test]
fn test_reviewer_without_architect_is_review_preset() {
    let classifier = Classifier::default();
    let result = classifier.classify(&ClassificationInput::new(
        "code-reviewer",
        "Reviews pull requests",
        "",
    ));
    assert_eq!(result.group_preset, GroupPreset::Review);
    assert!(result.file_restriction.is_none());
}

#[test]
fn test_scorer_example() {
    let table: PatternTable = [("foo|bar", "desc1"), ("baz", "desc2")].into_iter().collect();
    let best = best_match("this is a foo bar test", &table);
    assert_eq!(best.payload.map(String::as_str), Some("desc1"));
    assert_eq!(best.score, 6);
}

#[test]
fn test_scorer_no_match() {
    let table: PatternTable = [("foo|bar", "desc1")].into_iter().collect();
    let best = best_match("nothing here", &table);
    assert!(!best.is_match());
    assert_eq!(best.score, 0);
}
