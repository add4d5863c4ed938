//! kilomode - Convert Claude Code sub-agents into Kilo Code custom modes
//!
//! Reads agent files (YAML frontmatter plus a markdown body), infers an icon,
//! a short description, tool groups and a "when to use" sentence from keyword
//! analysis of the text, and writes `customModes` YAML for Kilo Code.

pub mod agent;
pub mod batch;
pub mod classify;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod mode;
pub mod report;
pub mod sanitizer;
pub mod writer;
