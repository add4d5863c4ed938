use std::path::Path;

use anyhow::{bail, Result};
use serde_json::json;

use crate::config::Config;
use crate::convert::{Conversion, Converter};

/// Print everything inferred for one agent file without writing anything.
pub fn run(path: &str, as_json: bool, config: Option<String>) -> Result<()> {
    let file = Path::new(path);
    if !file.exists() {
        bail!("File not found: {}", path);
    }
    if !file.is_file() {
        bail!("Path is not a file: {}", path);
    }

    let config = Config::load_with_path(config)?;
    let conversion = Converter::from_config(&config).convert_file(file)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&to_json(&conversion, &config))?);
    } else {
        print_conversion(&conversion, &config);
    }
    Ok(())
}

pub fn to_json(conversion: &Conversion, config: &Config) -> serde_json::Value {
    let model = conversion.agent.model.as_deref();
    json!({
        "name": conversion.agent.name,
        "slug": conversion.mode.slug,
        "displayName": conversion.mode.name,
        "iconTier": conversion.classification.icon_tier.to_string(),
        "classification": conversion.classification,
        "tools": conversion.agent.tools,
        "model": model,
        "mappedModel": model.and_then(|m| config.map_model(m)),
        "sanitized": conversion.sanitized,
    })
}

fn print_conversion(conversion: &Conversion, config: &Config) {
    let c = &conversion.classification;
    let capabilities: Vec<&str> = c.capabilities.iter().map(|cap| cap.as_str()).collect();

    println!("\n🔎 {} ({})\n", conversion.mode.name, conversion.mode.slug);
    println!("   Icon:        {} [{}]", c.icon, c.icon_tier);
    println!("   Description: {}", c.short_description);
    println!(
        "   Groups:      {} ({})",
        c.group_preset.name(),
        capabilities.join(", ")
    );
    if let Some(restriction) = &c.file_restriction {
        println!(
            "   Restriction: edit limited to {} ({})",
            restriction.file_regex, restriction.description
        );
    }
    println!("   When to use: {}", c.when_to_use);

    if let Some(model) = &conversion.agent.model {
        let mapped = config.map_model(model).unwrap_or("unmapped");
        println!("   Model:       {} → {}", model, mapped);
    }
    if !conversion.agent.tools.is_empty() {
        println!("   Tools:       {}", conversion.agent.tools.join(", "));
    }
    if conversion.sanitized {
        println!("\n⚠️  Frontmatter only parsed after YAML sanitization");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_run_file_not_found() {
        let result = run("/tmp/nonexistent-inspect-file-xyz.md", false, None);
        assert!(result.unwrap_err().to_string().contains("File not found"));
    }

    #[test]
    fn test_run_path_is_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = run(dir.path().to_str().unwrap(), false, None);
        assert!(result.unwrap_err().to_string().contains("not a file"));
    }

    #[test]
    #[serial]
    fn test_run_valid_agent() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("agent.md");
        std::fs::write(&path, "---\nname: ml-engineer\ndescription: Trains models\n---\n").unwrap();
        assert!(run(path.to_str().unwrap(), true, None).is_ok());
        assert!(run(path.to_str().unwrap(), false, None).is_ok());
    }

    #[test]
    fn test_json_shape() {
        let config = Config::default();
        let conversion = Converter::default()
            .convert_str("---\nname: ai-engineer\ndescription: Trains LLM agents\nmodel: opus\n---\nRAG pipelines")
            .unwrap();
        let value = to_json(&conversion, &config);
        assert_eq!(value["slug"], "ai-engineer");
        assert_eq!(value["model"], "opus");
        assert_eq!(value["mappedModel"], "anthropic/claude-opus-3");
        assert_eq!(value["classification"]["groupPreset"], "full");
        assert_eq!(value["sanitized"], false);
    }
}
