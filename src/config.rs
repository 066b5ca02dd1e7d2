use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Honorifics that mark a row as a genuine member entry. Rows whose first
/// whitespace-delimited token is not in this set (section headers, clerks'
/// notes, page artifacts) are dropped by the record extractor.
pub const DEFAULT_HONORIFICS: &[&str] = &["Assoc", "Dr", "Miss", "Mr", "Mrs", "Ms"];

/// Tuning knobs for the attendance pipeline. Everything has a sensible
/// default for the Votes and Proceedings layout; a YAML file can override
/// per-document quirks without recompiling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Recognized name-prefix tokens for member rows.
    pub honorifics: Vec<String>,
    /// How many rows above the first PRESENT: marker the sitting date sits.
    pub date_anchor_offset: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            honorifics: DEFAULT_HONORIFICS.iter().map(|s| s.to_string()).collect(),
            date_anchor_offset: 2,
        }
    }
}

impl PipelineConfig {
    /// Load from a YAML file. Missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {:?}", path.as_ref()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file {:?}", path.as_ref()))
    }

    pub fn is_honorific(&self, token: &str) -> bool {
        self.honorifics.iter().any(|h| h == token)
    }
}
