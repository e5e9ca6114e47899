use serde::{Deserialize, Serialize};

/// Confidence label attached by the model to a symbol extraction.
/// Informational only; never gates behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    #[default]
    Low,
}

/// Result of asking the model to pull token symbols out of free text.
/// `tokens` is lowercase and may be empty; produced per request, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedSymbols {
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub confidence: Confidence,
}
