//! Short (2–4 word) mode descriptions.

use super::scorer::{best_match, PatternTable};
use super::ClassificationInput;

#[derive(Debug, Clone)]
pub struct ShortDescriptionTables {
    /// Checked first.
    pub roles: PatternTable,
    /// Only consulted when no role label scores.
    pub domains: PatternTable,
    pub default_label: String,
}

impl ShortDescriptionTables {
    pub fn builtin() -> Self {
        let roles = [
            ("debug|troubleshoot|error|bug|issue|diagnostic|investigate", "Debug and troubleshoot"),
            ("test|testing|qa|quality|unit|integration|e2e|automation|coverage", "Testing and QA"),
            ("security|audit|vulnerability|compliance|penetration|owasp|auth|encryption", "Security and auditing"),
            ("legal|privacy|gdpr|ccpa|terms|policy|compliance|regulatory|law", "Legal and compliance"),
            ("market|content|blog|social|seo|email|campaign|copy|brand", "Marketing and content"),
            ("finance|trading|quant|risk|portfolio|investment|financial", "Financial analysis"),
            (
                "performance-engineer|optimize-specialist|speed-expert|cache-expert|benchmark|profile",
                "Performance optimization",
            ),
            ("architect|design|pattern|structure|system|planning|specification", "Architecture and design"),
            ("review|reviewer|analyze|analysis|inspect|examine|evaluate", "Code review"),
            ("frontend|react|ui|ux|component|responsive|web", "Frontend development"),
            ("backend|api|server|database|microservice|rest|graphql", "Backend development"),
        ]
        .into_iter()
        .collect();

        let domains = [
            ("ai|llm|ml|machine|learning|data|analytics|neural|vector|embedding|rag|prompt", "AI and ML"),
            ("cloud|aws|azure|gcp|terraform|kubernetes|docker|devops|infrastructure|deploy", "DevOps and cloud"),
            ("mobile|ios|android|swift|kotlin|react-native|flutter|app", "Mobile development"),
            ("game|unity|unreal|3d|graphics|rendering|physics|gameplay", "Game development"),
            ("database|sql|nosql|mongodb|postgres|mysql", "Database management"),
        ]
        .into_iter()
        .collect();

        Self {
            roles,
            domains,
            default_label: "Development specialist".to_string(),
        }
    }
}

impl Default for ShortDescriptionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

pub struct ShortDescriptionGenerator {
    tables: ShortDescriptionTables,
}

impl Default for ShortDescriptionGenerator {
    fn default() -> Self {
        Self::new(ShortDescriptionTables::builtin())
    }
}

impl ShortDescriptionGenerator {
    pub fn new(tables: ShortDescriptionTables) -> Self {
        Self { tables }
    }

    pub fn generate(&self, input: &ClassificationInput) -> String {
        let text = input.combined_text();

        [&self.tables.roles, &self.tables.domains]
            .into_iter()
            .find_map(|table| best_match(&text, table).payload.cloned())
            .unwrap_or_else(|| self.tables.default_label.clone())
    }
}
