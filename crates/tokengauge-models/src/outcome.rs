use serde::{Deserialize, Serialize};

use crate::score::TokenScore;

/// Partitioned result of looking up a batch of symbols.
/// `found` follows lookup order; `not_found` holds the uppercased symbols
/// that resolved to nothing, likewise in lookup order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupOutcome {
    pub found: Vec<TokenScore>,
    pub not_found: Vec<String>,
}

/// Structured payload attached to a successful explicit-query response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenScoresData {
    pub scores: Vec<TokenScore>,
    pub not_found: Vec<String>,
    pub total_requested: usize,
}

/// Structured payload attached to a successful wallet-analysis response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletScoresData {
    pub total_tokens: usize,
    pub analyzed_tokens: usize,
    pub not_found_tokens: Vec<String>,
    pub scores: Vec<TokenScore>,
}

/// What a handler returns to the host: always well-formed, never a raw fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    pub success: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ActionResponse {
    pub fn ok(text: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: true,
            text: text.into(),
            data: Some(data),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
            data: None,
        }
    }

    pub fn failure_with_data(text: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            success: false,
            text: text.into(),
            data: Some(data),
        }
    }
}
