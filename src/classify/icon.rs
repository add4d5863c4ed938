//! Icon selection for converted modes.
//!
//! Tiers, first success wins:
//! 1. exact role contained in the agent name
//! 2. weighted domain + characteristic keyword scores
//! 3. category words in name/description
//! 4. the default icon

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use super::codicons::CODICONS;
use super::ClassificationInput;

/// Per-field weights applied when a keyword is found in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights {
    pub name: u32,
    pub description: u32,
    pub body: u32,
}

pub const DOMAIN_WEIGHTS: FieldWeights = FieldWeights {
    name: 10,
    description: 5,
    body: 2,
};

pub const CHARACTERISTIC_WEIGHTS: FieldWeights = FieldWeights {
    name: 8,
    description: 3,
    body: 1,
};

/// Which tier produced the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTier {
    ExactRole,
    Weighted,
    CategoryFallback,
    Default,
}

impl fmt::Display for IconTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconTier::ExactRole => write!(f, "exact-role"),
            IconTier::Weighted => write!(f, "weighted"),
            IconTier::CategoryFallback => write!(f, "category-fallback"),
            IconTier::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconChoice {
    pub icon: String,
    pub tier: IconTier,
}

/// Keyword tables driving [`IconSelector`].
#[derive(Debug, Clone)]
pub struct IconTables {
    /// Role name → icon, matched verbatim against the normalized agent name.
    pub exact_roles: Vec<(String, String)>,
    pub domain_keywords: Vec<(String, String)>,
    pub characteristic_keywords: Vec<(String, String)>,
    /// Category word → icon, checked in order.
    pub fallback_categories: Vec<(String, String)>,
    pub valid_icons: HashSet<String>,
    pub default_icon: String,
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl IconTables {
    /// Tables for Claude Code sub-agents mapped onto codicons.
    pub fn builtin() -> Self {
        Self {
            exact_roles: pairs(&[
                ("architect", "codicon-type-hierarchy-sub"),
                ("debugger", "codicon-bug"),
                ("code-reviewer", "codicon-code-review"),
                ("security-auditor", "codicon-shield"),
                ("database-admin", "codicon-database"),
                ("devops", "codicon-gear"),
                ("prompt-engineer", "codicon-wand"),
                ("ai-engineer", "codicon-robot"),
                ("ml-engineer", "codicon-beaker"),
                ("data-scientist", "codicon-graph-line"),
                ("data-engineer", "codicon-database"),
                ("frontend-developer", "codicon-browser"),
                ("backend-developer", "codicon-server"),
                ("mobile-developer", "codicon-device-mobile"),
                ("ui-ux-designer", "codicon-paintcan"),
                ("test-automator", "codicon-beaker-stop"),
                ("performance-engineer", "codicon-pulse"),
                ("deployment-engineer", "codicon-rocket"),
                ("network-engineer", "codicon-broadcast"),
                ("cloud-architect", "codicon-cloud"),
                ("incident-responder", "codicon-warning"),
                ("legal-advisor", "codicon-law"),
                ("business-analyst", "codicon-briefcase"),
                ("content-marketer", "codicon-megaphone"),
                ("customer-support", "codicon-person"),
            ]),
            domain_keywords: pairs(&[
                // AI/ML
                ("ai", "codicon-robot"),
                ("llm", "codicon-copilot"),
                ("ml", "codicon-beaker"),
                ("machine", "codicon-beaker"),
                ("learning", "codicon-lightbulb"),
                ("neural", "codicon-circuit-board"),
                ("embedding", "codicon-symbol-array"),
                ("vector", "codicon-symbol-array"),
                ("rag", "codicon-search"),
                ("prompt", "codicon-wand"),
                // web/frontend
                ("frontend", "codicon-browser"),
                ("react", "codicon-symbol-interface"),
                ("ui", "codicon-paintcan"),
                ("ux", "codicon-paintcan"),
                ("css", "codicon-color-mode"),
                ("html", "codicon-code"),
                ("web", "codicon-globe"),
                ("mobile", "codicon-device-mobile"),
                ("responsive", "codicon-device-mobile"),
                // backend/infrastructure
                ("backend", "codicon-server"),
                ("api", "codicon-plug"),
                ("server", "codicon-server-process"),
                ("database", "codicon-database"),
                ("sql", "codicon-table"),
                ("cloud", "codicon-cloud"),
                ("devops", "codicon-gear"),
                ("docker", "codicon-package"),
                ("kubernetes", "codicon-organization"),
                ("terraform", "codicon-tools"),
                ("aws", "codicon-cloud"),
                ("azure", "codicon-azure"),
                // security
                ("security", "codicon-shield"),
                ("audit", "codicon-verified"),
                ("compliance", "codicon-law"),
                ("penetration", "codicon-bug"),
                ("vulnerability", "codicon-warning"),
                // testing/quality
                ("test", "codicon-beaker"),
                ("testing", "codicon-beaker-stop"),
                ("qa", "codicon-pass"),
                ("quality", "codicon-verified"),
                ("debug", "codicon-bug"),
                ("performance", "codicon-pulse"),
                // data/analytics
                ("data", "codicon-graph-line"),
                ("analytics", "codicon-pie-chart"),
                ("etl", "codicon-arrow-swap"),
                ("pipeline", "codicon-arrow-right"),
                ("warehouse", "codicon-database"),
                ("visualization", "codicon-graph-scatter"),
                // languages
                ("python", "codicon-python"),
                ("javascript", "codicon-symbol-method"),
                ("typescript", "codicon-symbol-interface"),
                ("java", "codicon-symbol-class"),
                ("golang", "codicon-symbol-method"),
                ("rust", "codicon-gear"),
                ("cpp", "codicon-symbol-structure"),
                ("csharp", "codicon-symbol-class"),
                ("php", "codicon-code"),
            ]),
            characteristic_keywords: pairs(&[
                // roles
                ("architect", "codicon-type-hierarchy-sub"),
                ("engineer", "codicon-gear"),
                ("developer", "codicon-code"),
                ("specialist", "codicon-star-full"),
                ("expert", "codicon-verified"),
                ("pro", "codicon-star-full"),
                ("admin", "codicon-person"),
                ("manager", "codicon-briefcase"),
                ("lead", "codicon-organization"),
                ("senior", "codicon-mortar-board"),
                // actions
                ("build", "codicon-tools"),
                ("deploy", "codicon-rocket"),
                ("monitor", "codicon-eye"),
                ("optimize", "codicon-pulse"),
                ("automate", "codicon-run-all"),
                ("integrate", "codicon-plug"),
                ("migrate", "codicon-arrow-swap"),
                ("modernize", "codicon-lightbulb-autofix"),
                ("troubleshoot", "codicon-search"),
                ("review", "codicon-eye"),
                ("document", "codicon-book"),
                ("analyze", "codicon-inspect"),
            ]),
            fallback_categories: pairs(&[
                ("development", "codicon-code"),
                ("engineering", "codicon-gear"),
                ("design", "codicon-paintcan"),
                ("analysis", "codicon-inspect"),
                ("management", "codicon-briefcase"),
                ("support", "codicon-person"),
                ("research", "codicon-telescope"),
                ("consulting", "codicon-comment-discussion"),
                ("default", "codicon-gear"),
            ]),
            valid_icons: CODICONS.iter().map(|s| s.to_string()).collect(),
            default_icon: "codicon-gear".to_string(),
        }
    }
}

impl Default for IconTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lower-case and turn `-`/`_` separators into spaces.
pub fn normalize_name(name: &str) -> String {
    name.replace(['-', '_'], " ").to_lowercase()
}

pub struct IconSelector {
    tables: IconTables,
}

impl Default for IconSelector {
    fn default() -> Self {
        Self::new(IconTables::builtin())
    }
}

impl IconSelector {
    pub fn new(tables: IconTables) -> Self {
        Self { tables }
    }

    pub fn is_valid(&self, icon: &str) -> bool {
        self.tables.valid_icons.contains(icon)
    }

    pub fn select_icon(&self, input: &ClassificationInput) -> String {
        self.select(input).icon
    }

    /// Select an icon and report which tier chose it.
    pub fn select(&self, input: &ClassificationInput) -> IconChoice {
        let name = normalize_name(&input.name);
        let description = input.description.to_lowercase();
        let body = input.body.to_lowercase();

        if let Some(icon) = self.exact_role(&name) {
            return IconChoice {
                icon,
                tier: IconTier::ExactRole,
            };
        }

        if let Some(icon) = self.weighted(&name, &description, &body) {
            return IconChoice {
                icon,
                tier: IconTier::Weighted,
            };
        }

        if let Some(icon) = self.category_fallback(&name, &description) {
            return IconChoice {
                icon,
                tier: IconTier::CategoryFallback,
            };
        }

        IconChoice {
            icon: self.default_icon(),
            tier: IconTier::Default,
        }
    }

    /// Role keys are matched as written, in table order. A hyphenated key
    /// never appears in a normalized name.
    fn exact_role(&self, name: &str) -> Option<String> {
        self.tables
            .exact_roles
            .iter()
            .find(|(role, icon)| name.contains(role.as_str()) && self.is_valid(icon))
            .map(|(role, icon)| {
                debug!("icon: exact role '{}' -> {}", role, icon);
                icon.clone()
            })
    }

    fn weighted(&self, name: &str, description: &str, body: &str) -> Option<String> {
        // icon -> score, in the order icons were first credited
        let mut scores: Vec<(&str, u32)> = Vec::new();

        let passes = [
            (&self.tables.domain_keywords, DOMAIN_WEIGHTS),
            (&self.tables.characteristic_keywords, CHARACTERISTIC_WEIGHTS),
        ];

        for (keywords, weights) in passes {
            for (keyword, icon) in keywords {
                let keyword = keyword.as_str();
                let mut score = 0;
                if name.contains(keyword) {
                    score += weights.name;
                }
                if description.contains(keyword) {
                    score += weights.description;
                }
                if body.contains(keyword) {
                    score += weights.body;
                }
                if score == 0 {
                    continue;
                }
                match scores.iter_mut().find(|(i, _)| *i == icon.as_str()) {
                    Some((_, total)) => *total += score,
                    None => scores.push((icon.as_str(), score)),
                }
            }
        }

        let mut best: Option<(&str, u32)> = None;
        for (icon, score) in scores {
            if !self.is_valid(icon) {
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((icon, score));
            }
        }

        best.map(|(icon, score)| {
            debug!("icon: weighted score {} -> {}", score, icon);
            icon.to_string()
        })
    }

    fn category_fallback(&self, name: &str, description: &str) -> Option<String> {
        let haystack = format!("{} {}", name, description);
        self.tables
            .fallback_categories
            .iter()
            .find(|(category, icon)| haystack.contains(category.as_str()) && self.is_valid(icon))
            .map(|(_, icon)| icon.clone())
    }

    fn default_icon(&self) -> String {
        if self.is_valid(&self.tables.default_icon) {
            self.tables.default_icon.clone()
        } else {
            // a misconfigured default still has to yield an allowed icon
            CODICONS
                .iter()
                .find(|icon| self.is_valid(icon))
                .map(|icon| icon.to_string())
                .unwrap_or_else(|| self.tables.default_icon.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, description: &str, body: &str) -> ClassificationInput {
        ClassificationInput::new(name, description, body)
    }

    #[test]
    fn test_exact_role_short_circuits() {
        let selector = IconSelector::default();
        let choice = selector.select(&input(
            "architect",
            "react frontend database security python",
            "kubernetes docker terraform",
        ));
        assert_eq!(choice.icon, "codicon-type-hierarchy-sub");
        assert_eq!(choice.tier, IconTier::ExactRole);
    }

    #[test]
    fn test_hyphenated_roles_fall_through_to_weighted() {
        let selector = IconSelector::default();
        // "code reviewer" never contains "code-reviewer"; "review" scores 8
        let choice = selector.select(&input("code-reviewer", "", ""));
        assert_eq!(choice.tier, IconTier::Weighted);
        assert_eq!(choice.icon, "codicon-eye");

        let choice = selector.select(&input("security_auditor", "", ""));
        assert_eq!(choice.tier, IconTier::Weighted);
        assert_eq!(choice.icon, "codicon-shield");
    }

    #[test]
    fn test_single_word_role_inside_compound_name() {
        let selector = IconSelector::default();
        let choice = selector.select(&input("cloud-architect", "", ""));
        assert_eq!(choice.tier, IconTier::ExactRole);
        assert_eq!(choice.icon, "codicon-type-hierarchy-sub");

        let choice = selector.select(&input("Senior_DevOps_Lead", "", ""));
        assert_eq!(choice.tier, IconTier::ExactRole);
        assert_eq!(choice.icon, "codicon-gear");
    }

    #[test]
    fn test_exact_roles_checked_in_table_order() {
        let selector = IconSelector::default();
        // "architect" precedes "debugger" in the table
        assert_eq!(
            selector.select_icon(&input("debugger-architect", "", "")),
            "codicon-type-hierarchy-sub"
        );
    }

    #[test]
    fn test_weighted_tier_prefers_name_hits() {
        let selector = IconSelector::default();
        let choice = selector.select(&input("python-pro", "", ""));
        assert_eq!(choice.tier, IconTier::Weighted);
        // python (10) beats pro (8)
        assert_eq!(choice.icon, "codicon-python");
    }

    #[test]
    fn test_weighted_scores_accumulate_across_passes() {
        let selector = IconSelector::default();
        // "engineer" credits codicon-gear (characteristic), "rust" credits it (domain)
        let choice = selector.select(&input("rust", "engineer", ""));
        assert_eq!(choice.icon, "codicon-gear");
        assert_eq!(choice.tier, IconTier::Weighted);
    }

    #[test]
    fn test_invalid_icons_are_skipped() {
        let mut tables = IconTables::builtin();
        tables.domain_keywords = pairs(&[("zzz", "codicon-not-real"), ("yyy", "codicon-bug")]);
        tables.characteristic_keywords.clear();
        let selector = IconSelector::new(tables);
        let choice = selector.select(&input("zzz", "zzz", "zzz yyy"));
        assert_eq!(choice.icon, "codicon-bug");
    }

    #[test]
    fn test_weighted_tie_goes_to_first_credited_icon() {
        let mut tables = IconTables::builtin();
        tables.domain_keywords = pairs(&[("alpha", "codicon-bug"), ("beta", "codicon-book")]);
        tables.characteristic_keywords.clear();
        let selector = IconSelector::new(tables);
        assert_eq!(selector.select_icon(&input("beta alpha", "", "")), "codicon-bug");
    }

    #[test]
    fn test_category_fallback() {
        let mut tables = IconTables::builtin();
        tables.domain_keywords.clear();
        tables.characteristic_keywords.clear();
        let selector = IconSelector::new(tables);
        let choice = selector.select(&input("helper", "does research", ""));
        assert_eq!(choice.icon, "codicon-telescope");
        assert_eq!(choice.tier, IconTier::CategoryFallback);
    }

    #[test]
    fn test_empty_input_returns_default() {
        let selector = IconSelector::default();
        let choice = selector.select(&input("", "", ""));
        assert_eq!(choice.icon, "codicon-gear");
        assert_eq!(choice.tier, IconTier::Default);
    }

    #[test]
    fn test_invalid_default_still_returns_valid_icon() {
        let mut tables = IconTables::builtin();
        tables.default_icon = "not-an-icon".to_string();
        let selector = IconSelector::new(tables);
        let icon = selector.select_icon(&input("", "", ""));
        assert!(selector.is_valid(&icon));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let selector = IconSelector::default();
        let i = input("data-wrangler", "Builds ETL pipelines", "Uses SQL and python");
        assert_eq!(selector.select(&i), selector.select(&i));
    }

    #[test]
    fn test_builtin_tables_only_reference_valid_icons() {
        let tables = IconTables::builtin();
        let all = tables
            .exact_roles
            .iter()
            .chain(&tables.domain_keywords)
            .chain(&tables.characteristic_keywords)
            .chain(&tables.fallback_categories);
        for (key, icon) in all {
            assert!(tables.valid_icons.contains(icon), "{} -> {}", key, icon);
        }
    }
}
