use tokengauge_models::ExtractedSymbols;
use tracing::{info, warn};

use crate::generator::TextGenerator;
use crate::parser::parse_extracted_symbols;
use crate::prompts::extract_symbols_prompt;

/// Ask the model which token symbols a user request mentions.
///
/// Degrades to an empty extraction on a failed model call or unusable output;
/// the caller decides what an empty symbol list means.
pub async fn extract_symbols(
    generator: &dyn TextGenerator,
    user_request: &str,
) -> ExtractedSymbols {
    let prompt = extract_symbols_prompt(user_request);

    match generator.generate(&prompt).await {
        Ok(text) => {
            let extraction = parse_extracted_symbols(&text);
            if extraction.tokens.is_empty() {
                warn!("model output contained no usable token symbols");
            } else {
                info!(
                    tokens = ?extraction.tokens,
                    confidence = ?extraction.confidence,
                    "extracted token symbols"
                );
            }
            extraction
        }
        Err(e) => {
            warn!(error = %e, "model call failed during symbol extraction");
            ExtractedSymbols::default()
        }
    }
}
