use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use crate::agent::{parse_agent, split_frontmatter};
use crate::sanitizer::{YamlIssue, YamlSanitizer};

pub fn run(path: &str) -> Result<()> {
    let file = Path::new(path);
    if !file.exists() {
        bail!("File not found: {}", path);
    }
    if !file.is_file() {
        bail!("Path is not a file: {}", path);
    }

    let content = fs::read_to_string(file)?;
    let (frontmatter, _) = split_frontmatter(&content)?;

    let sanitizer = YamlSanitizer::new();
    let issues = sanitizer.detect_issues(&frontmatter);
    print_issues(&issues);

    match parse_agent(&content, &sanitizer) {
        Ok(parsed) if parsed.sanitized => {
            println!("⚠️  Frontmatter parses only after automatic sanitization");
        }
        Ok(_) => println!("✅ Frontmatter parses cleanly"),
        Err(e) => {
            println!("💡 {}", e.suggestion());
            bail!("{}: {}", e.kind(), e);
        }
    }

    Ok(())
}

fn print_issues(issues: &[YamlIssue]) {
    if issues.is_empty() {
        println!("✅ No YAML issues found!");
        return;
    }

    println!("\n📋 Frontmatter Check Results:\n");
    for issue in issues {
        println!("   • {}", issue);
    }
    println!("\nSummary: {} issue(s)\n", issues.len());
}
