//! script2bytes.toml configuration
//!
//! Every field is optional; command-line flags override file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tcscript_compiler::{DelayMode, OutputLayout};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// "sticky" (default) or "one-shot"
    pub delay_mode: DelayMode,

    /// "combined" (default) or "split"
    pub layout: OutputLayout,

    /// Extension of the default byte stream file
    /// Default: "byte"
    pub output_extension: String,

    /// Extension of the default delay file (split layout only)
    /// Default: "delay"
    pub delay_extension: String,

    /// Exit successfully even when the script had errors
    pub allow_errors: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            delay_mode: DelayMode::default(),
            layout: OutputLayout::default(),
            output_extension: "byte".to_string(),
            delay_extension: "delay".to_string(),
            allow_errors: false,
        }
    }
}

impl ShellConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
