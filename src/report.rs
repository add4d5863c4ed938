//! Markdown diagnostic report written after a directory conversion.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

/// A file that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssue {
    /// Path relative to the input directory.
    pub file_path: String,
    pub issue_type: String,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    pub total_files: usize,
    pub successful_files: usize,
    pub sanitized_files: usize,
    pub issues: Vec<FileIssue>,
    pub timestamp: DateTime<Local>,
}

/// Share of `part` in `total` as a percentage; 0 when nothing was processed.
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

impl DiagnosticReport {
    pub fn new(
        total_files: usize,
        successful_files: usize,
        sanitized_files: usize,
        issues: Vec<FileIssue>,
    ) -> Self {
        Self {
            total_files,
            successful_files,
            sanitized_files,
            issues,
            timestamp: Local::now(),
        }
    }

    pub fn failed_files(&self) -> usize {
        self.total_files.saturating_sub(self.successful_files)
    }

    pub fn verdict(&self) -> &'static str {
        match self.failed_files() {
            0 => "🎉 **Perfect conversion rate!** All files were successfully converted.",
            1..=5 => "✅ **Excellent conversion rate!** Only a few files need manual attention.",
            6..=15 => "⚠️ **Good conversion rate** with some files needing manual fixes.",
            _ => "❌ **Multiple files need attention** - consider reviewing the patterns below.",
        }
    }

    /// Issues grouped by type, groups in order of first appearance.
    pub fn grouped_issues(&self) -> Vec<(&str, Vec<&FileIssue>)> {
        let mut groups: Vec<(&str, Vec<&FileIssue>)> = Vec::new();
        for issue in &self.issues {
            match groups.iter_mut().find(|(t, _)| *t == issue.issue_type) {
                Some((_, members)) => members.push(issue),
                None => groups.push((issue.issue_type.as_str(), vec![issue])),
            }
        }
        groups
    }

    pub fn render(&self) -> String {
        let total = self.total_files;
        let failed = self.failed_files();
        let mut content = String::new();

        content.push_str("# Claude Agent Conversion Diagnostic Report\n\n");
        content.push_str(&format!(
            "Generated: {}\n\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        ));

        content.push_str("## Summary\n\n");
        content.push_str(&format!("- **Total files processed**: {}\n", total));
        content.push_str(&format!(
            "- **Successfully converted**: {} ({:.1}%)\n",
            self.successful_files,
            percent(self.successful_files, total)
        ));
        content.push_str(&format!(
            "- **Failed conversions**: {} ({:.1}%)\n",
            failed,
            percent(failed, total)
        ));
        content.push_str(&format!(
            "- **Files requiring sanitization**: {} ({:.1}%)\n\n",
            self.sanitized_files,
            percent(self.sanitized_files, total)
        ));
        content.push_str(self.verdict());
        content.push_str("\n\n");

        if !self.issues.is_empty() {
            content.push_str("## Issues Found\n\n");
            for (issue_type, issues) in self.grouped_issues() {
                content.push_str(&format!("### {} ({} files)\n\n", issue_type, issues.len()));
                for issue in issues {
                    content.push_str(&format!("**File**: `{}`\n", issue.file_path));
                    content.push_str(&format!("**Issue**: {}\n", issue.description));
                    if !issue.suggestion.is_empty() {
                        content.push_str(&format!("**Suggestion**: {}\n", issue.suggestion));
                    }
                    content.push('\n');
                }
            }
        }

        content.push_str("## Recommendations\n\n");

        if self.sanitized_files > 0 {
            content.push_str(&format!(
                "### YAML Sanitization Applied ({} files)\n\n",
                self.sanitized_files
            ));
            content.push_str("The converter automatically fixed common YAML issues in these files:\n");
            content.push_str("- Long descriptions with unescaped quotes → Converted to YAML literal blocks\n");
            content.push_str("- Tools field as comma-separated string → Converted to YAML array format\n");
            content.push_str("- Embedded examples and special characters → Properly formatted\n\n");
            content.push_str(
                "✅ **No action needed** - these files were automatically fixed during conversion.\n\n",
            );
        }

        if failed > 0 {
            content.push_str(MANUAL_FIXES);
        }

        content.push_str(BEST_PRACTICES);

        content.push_str("## Conversion Statistics\n\n");
        content.push_str("| Metric | Count | Percentage |\n");
        content.push_str("|--------|-------|------------|\n");
        content.push_str(&format!("| Total Files | {} | 100% |\n", total));
        content.push_str(&format!(
            "| Successful | {} | {:.1}% |\n",
            self.successful_files,
            percent(self.successful_files, total)
        ));
        content.push_str(&format!(
            "| Failed | {} | {:.1}% |\n",
            failed,
            percent(failed, total)
        ));
        content.push_str(&format!(
            "| Auto-Fixed | {} | {:.1}% |\n",
            self.sanitized_files,
            percent(self.sanitized_files, total)
        ));

        content
    }

    /// Write the report as `dir/file_name` and return the path.
    pub fn write(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        fs::write(&path, self.render())
            .with_context(|| format!("failed to write diagnostic report {}", path.display()))?;
        Ok(path)
    }
}

const MANUAL_FIXES: &str = "### Manual Fixes Required

For the remaining failed files, consider these approaches:

#### Option 1: Manual Fix
Edit the files directly to fix the YAML frontmatter issues.

#### Option 2: LLM-Assisted Fix
Use this prompt with an LLM to fix the files:

```
Please fix the YAML frontmatter in this Claude agent file. The issues are:
1. Ensure proper YAML syntax with correct quoting
2. Convert long descriptions to YAML literal blocks (|) if they contain quotes or examples
3. Convert tools field from comma-separated string to YAML array format
4. Preserve all content meaning while making it valid YAML

[Paste the problematic file content here]
```

";

const BEST_PRACTICES: &str = "## Best Practices for Future Claude Agent Files

To avoid conversion issues in the future:

### YAML Frontmatter Guidelines
1. **Use literal blocks for long descriptions**:
   ```yaml
   description: |
     Your long description here
     with multiple lines and examples
   ```

2. **Format tools as YAML arrays**:
   ```yaml
   tools: [Read, Write, Bash, Grep]
   ```

3. **Escape quotes in descriptions**:
   ```yaml
   description: \"Use this agent when you need to 'quote' something\"
   ```

4. **Required fields**:
   - `name`: Agent identifier (kebab-case recommended)
   - `description`: What the agent does and when to use it

";
