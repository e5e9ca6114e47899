use tokengauge_models::ExtractedSymbols;

/// Strip a surrounding markdown code fence (```json ... ``` or ``` ... ```)
/// from a model response, if present.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional json tag on the opening fence, newline or not.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}

/// Parse the model's symbol-extraction output.
///
/// Unparsable JSON, a missing `tokens` field, or a non-array `tokens` all
/// yield an empty extraction rather than an error.
/// Symbols are lowercased here so downstream lookups are case-insensitive.
pub fn parse_extracted_symbols(text: &str) -> ExtractedSymbols {
    let cleaned = strip_code_fences(text);

    let Ok(value) = serde_json::from_str::<serde_json::Value>(cleaned) else {
        return ExtractedSymbols::default();
    };

    let Some(tokens) = value.get("tokens").and_then(|t| t.as_array()) else {
        return ExtractedSymbols::default();
    };

    let tokens = tokens
        .iter()
        .filter_map(|t| t.as_str())
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let confidence = value
        .get("confidence")
        .and_then(|c| serde_json::from_value(c.clone()).ok())
        .unwrap_or_default();

    ExtractedSymbols { tokens, confidence }
}
