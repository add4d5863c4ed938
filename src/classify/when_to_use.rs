//! "When to use" sentence generation.
//!
//! An explicit `Use PROACTIVELY for ...` clause in the description always
//! wins. Otherwise the combined text is scored against role, domain and
//! action tables and the winners are stitched into one sentence.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::scorer::{best_match, PatternTable};
use super::ClassificationInput;

static PROACTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)use\s+proactively\s+for\s+([^.]+)").expect("proactive clause regex")
});

/// Domain specialisation appended after the main clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainHint {
    pub text: String,
    /// Term whose presence in the role payload means the hint adds nothing.
    pub key_term: String,
}

impl DomainHint {
    pub fn new(text: &str, key_term: &str) -> Self {
        Self {
            text: text.to_string(),
            key_term: key_term.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WhenToUseTables {
    pub roles: PatternTable,
    pub domains: PatternTable<DomainHint>,
    pub actions: PatternTable,
    pub fallback: String,
    /// Domain hints need a score above this to be appended.
    pub domain_threshold: usize,
}

impl WhenToUseTables {
    pub fn builtin() -> Self {
        let roles: PatternTable = [
            (
                "frontend|react|ui|ux|component|responsive|web",
                "when you need frontend development, UI/UX work, or web application building. Perfect for React components, responsive design, user interfaces, or client-side development",
            ),
            (
                "backend|api|server|database|microservice|rest|graphql",
                "when you need backend development, API design, or server-side programming. Ideal for building APIs, managing databases, or creating server applications",
            ),
            (
                "debug|troubleshoot|error|bug|issue|diagnostic|investigate",
                "when you're troubleshooting issues, investigating errors, or diagnosing problems. Specialized in systematic debugging, adding logging, analyzing stack traces, and identifying root causes before applying fixes",
            ),
            (
                "test|testing|qa|quality|unit|integration|e2e|automation|coverage",
                "when you need comprehensive testing, quality assurance, or test automation. Perfect for creating test suites, setting up CI pipelines, or ensuring code quality",
            ),
            (
                "security|audit|vulnerability|compliance|penetration|owasp|auth|encryption",
                "when you need security reviews, vulnerability assessments, or compliance checks. Ideal for implementing secure authentication, conducting security audits, or ensuring regulatory compliance",
            ),
            (
                "legal|privacy|gdpr|ccpa|terms|policy|compliance|regulatory|law",
                "when you need legal documentation, privacy policies, or regulatory compliance. Perfect for drafting terms of service, privacy policies, or ensuring legal compliance",
            ),
            (
                "market|content|blog|social|seo|email|campaign|copy|brand",
                "when you need marketing content, social media posts, or content strategy. Ideal for creating blog posts, email campaigns, or SEO-optimized content",
            ),
            (
                "finance|trading|quant|risk|portfolio|investment|financial",
                "when you need financial analysis, trading strategies, or risk management. Perfect for quantitative finance, portfolio optimization, or market analysis",
            ),
            (
                "performance-engineer|optimize-specialist|speed-expert|cache-expert|benchmark|profile",
                "when you need performance optimization, scalability improvements, or system tuning. Specialized in profiling applications, implementing caching strategies, and optimizing bottlenecks",
            ),
            (
                "architect|design|pattern|structure|system|planning|specification",
                "when you need system design, architecture planning, or technical documentation. Perfect for creating technical specifications, designing system architecture, or planning complex projects",
            ),
            (
                "review|reviewer|analyze|analysis|inspect|examine|evaluate",
                "when you need code review, quality assurance, or technical analysis. Ideal for reviewing code changes, analyzing system performance, or conducting technical evaluations",
            ),
        ]
        .into_iter()
        .collect();

        let domains = PatternTable::new()
            .with(
                "ai|llm|ml|machine|learning|data|analytics|neural|vector|embedding|rag|prompt",
                DomainHint::new(
                    "Specialized in AI/ML development, LLM integration, data analysis, or machine learning workflows",
                    "AI/ML",
                ),
            )
            .with(
                "frontend|react|ui|ux|web|html|css|javascript|component|responsive|mobile",
                DomainHint::new(
                    "Perfect for frontend development, UI/UX design, React components, or web application building",
                    "frontend",
                ),
            )
            .with(
                "backend|api|server|database|sql|microservice|rest|graphql|endpoint",
                DomainHint::new(
                    "Ideal for backend development, API design, database management, or server-side programming",
                    "backend",
                ),
            )
            .with(
                "cloud|aws|azure|gcp|terraform|kubernetes|docker|devops|infrastructure|deploy",
                DomainHint::new(
                    "Expert in cloud infrastructure, DevOps automation, containerization, or deployment strategies",
                    "cloud",
                ),
            )
            .with(
                "mobile|ios|android|swift|kotlin|react-native|flutter|app",
                DomainHint::new(
                    "Specialized in mobile application development, cross-platform solutions, or native app creation",
                    "mobile",
                ),
            )
            .with(
                "game|unity|unreal|3d|graphics|rendering|physics|gameplay",
                DomainHint::new(
                    "Perfect for game development, 3D graphics, game engine programming, or interactive applications",
                    "game",
                ),
            );

        let actions: PatternTable = [
            ("build|create|implement|develop|construct", "building and implementing solutions"),
            ("optimize|improve|enhance|tune|refactor", "optimization and performance improvements"),
            ("analyze|review|audit|inspect|evaluate", "analysis and review tasks"),
            ("design|architect|plan|structure|model", "design and architecture planning"),
            ("automate|streamline|integrate|orchestrate", "automation and integration tasks"),
            ("monitor|track|observe|measure|report", "monitoring and reporting activities"),
            ("migrate|modernize|upgrade|transform", "migration and modernization projects"),
            ("document|write|draft|create|generate", "documentation and content creation"),
        ]
        .into_iter()
        .collect();

        Self {
            roles,
            domains,
            actions,
            fallback: "general development tasks and code implementation".to_string(),
            domain_threshold: 5,
        }
    }
}

impl Default for WhenToUseTables {
    fn default() -> Self {
        Self::builtin()
    }
}

pub struct WhenToUseGenerator {
    tables: WhenToUseTables,
}

impl Default for WhenToUseGenerator {
    fn default() -> Self {
        Self::new(WhenToUseTables::builtin())
    }
}

impl WhenToUseGenerator {
    pub fn new(tables: WhenToUseTables) -> Self {
        Self { tables }
    }

    /// Pull the use case out of a `Use PROACTIVELY for <X>.` clause.
    ///
    /// A clause is used even when `<X>` is only whitespace.
    pub fn extract_proactive(&self, description: &str) -> Option<String> {
        let caps = PROACTIVE_RE.captures(description)?;
        let use_case = caps.get(1)?.as_str().trim();
        Some(format!("Use this mode when you need {}", use_case))
    }

    pub fn generate(&self, input: &ClassificationInput) -> String {
        if let Some(statement) = self.extract_proactive(&input.description) {
            debug!("when-to-use: using proactive clause");
            return format!("{}.", statement);
        }

        let text = input.combined_text();
        let role = best_match(&text, &self.tables.roles);
        let domain = best_match(&text, &self.tables.domains);
        let action = best_match(&text, &self.tables.actions);

        debug!(
            "when-to-use scores: role={} domain={} action={}",
            role.score, domain.score, action.score
        );

        let role_text = role.payload.map(String::as_str).unwrap_or("");

        let mut statement = match (role.payload, action.payload) {
            (Some(role), _) => format!("Use this mode {}", role),
            (None, Some(action)) => format!("Use this mode when you need {}", action),
            (None, None) => format!("Use this mode for {}", self.tables.fallback),
        };

        if let Some(hint) = domain.payload {
            if domain.score > self.tables.domain_threshold && !covers(role_text, hint) {
                statement.push_str(". ");
                statement.push_str(&hint.text);
            }
        }

        statement.push('.');
        statement
    }
}

/// Whether the role payload already says what the domain hint would add.
fn covers(role_text: &str, hint: &DomainHint) -> bool {
    role_text.contains("Specialized in") || role_text.contains(hint.key_term.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(name: &str, description: &str, body: &str) -> String {
        WhenToUseGenerator::default().generate(&ClassificationInput::new(name, description, body))
    }

    #[test]
    fn test_proactive_clause_wins() {
        let out = generate(
            "frontend-developer",
            "Use PROACTIVELY for code review and analysis.",
            "react react react",
        );
        assert_eq!(out, "Use this mode when you need code review and analysis.");
    }

    #[test]
    fn test_proactive_clause_mid_sentence() {
        let out = generate(
            "",
            "Expert debugger. use   proactively for flaky tests, crashes and hangs. More text.",
            "",
        );
        assert_eq!(
            out,
            "Use this mode when you need flaky tests, crashes and hangs."
        );
    }

    #[test]
    fn test_proactive_clause_without_period_runs_to_end() {
        let gen = WhenToUseGenerator::default();
        assert_eq!(
            gen.extract_proactive("Use proactively for schema migrations  ").as_deref(),
            Some("Use this mode when you need schema migrations")
        );
        assert!(gen.extract_proactive("No clause here").is_none());
    }

    #[test]
    fn test_blank_proactive_clause_still_short_circuits() {
        let gen = WhenToUseGenerator::default();
        assert_eq!(
            gen.extract_proactive("Use proactively for   .").as_deref(),
            Some("Use this mode when you need ")
        );
        // the debugging role would otherwise match
        let out = generate("debugger", "Use proactively for   . Fixes bugs.", "");
        assert_eq!(out, "Use this mode when you need .");
    }

    #[test]
    fn test_role_pattern_is_used() {
        let out = generate("", "This is for debugging and troubleshooting.", "");
        assert!(out.starts_with("Use this mode when you're troubleshooting issues"));
        assert!(out.ends_with('.'));
        assert!(!out.ends_with(".."));
    }

    #[test]
    fn test_action_pattern_when_no_role_matches() {
        // "migrate" only hits the action table
        let out = generate("", "migrate", "");
        assert_eq!(
            out,
            "Use this mode when you need migration and modernization projects."
        );
    }

    #[test]
    fn test_fallback_phrase() {
        let out = generate("", "", "");
        assert_eq!(
            out,
            "Use this mode for general development tasks and code implementation."
        );
    }

    #[test]
    fn test_domain_hint_appended_when_not_covered() {
        // role: security (8*1), domain: AI/ML via "llm" x3 = 9
        let out = generate("security", "llm llm llm", "");
        assert!(out.starts_with("Use this mode when you need security reviews"));
        assert!(out.ends_with(
            ". Specialized in AI/ML development, LLM integration, data analysis, or machine learning workflows."
        ));
    }

    #[test]
    fn test_domain_hint_skipped_when_role_covers_it() {
        // frontend role payload already mentions "frontend"
        let out = generate("frontend", "react web ui", "");
        assert!(out.starts_with("Use this mode when you need frontend development"));
        assert!(!out.contains("Perfect for frontend development, UI/UX design"));
    }

    #[test]
    fn test_domain_hint_below_threshold_is_ignored() {
        // "rag" scores 3 in the domain table
        let out = generate("", "rag", "");
        assert!(!out.contains("Specialized in AI/ML"));
    }

    #[test]
    fn test_output_is_never_empty() {
        for (n, d, b) in [("", "", ""), ("x", "y", "z"), ("debugger", "", "")] {
            assert!(!generate(n, d, b).is_empty());
        }
    }

    #[test]
    fn test_key_terms_match_hint_text() {
        let tables = WhenToUseTables::builtin();
        for entry in tables.domains.entries() {
            let third = entry.payload.text.split(' ').nth(2).unwrap();
            assert_eq!(third, entry.payload.key_term);
        }
    }
}
