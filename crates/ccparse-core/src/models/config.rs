//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};

use super::statement::Issuer;
use crate::error::Result;

/// Main configuration for the ccparse pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Pattern overrides. Unset lists keep the builtin patterns.
    pub patterns: PatternConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Glyph prefixed to the stored total due.
    pub currency_symbol: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Per-field pattern overrides, each list in priority order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuers: Option<Vec<IssuerPatternConfig>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_4_digits: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_due: Option<Vec<String>>,
}

/// Detection pattern for one issuer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuerPatternConfig {
    pub issuer: Issuer,
    pub pattern: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Summary file written at the end of a directory run.
    pub summary_file_name: String,

    /// Document extension picked up in directory mode (case-insensitive).
    pub extension: String,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_file_name: "parsing_summary.json".to_string(),
            extension: "pdf".to_string(),
            pretty: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
