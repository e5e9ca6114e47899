use tokengauge_models::TokenScore;

use crate::composer::WalletBreakdown;

/// Render an optional gauge with one decimal, or "N/A" when absent.
/// Missing technology data must never read as a zero score.
pub fn fmt_gauge(gauge: Option<f64>) -> String {
    match gauge {
        Some(value) => format!("{value:.1}"),
        None => "N/A".to_string(),
    }
}

/// Prompt instructing the model to pull token symbols out of a user request
/// and answer with nothing but a JSON object.
pub fn extract_symbols_prompt(user_request: &str) -> String {
    format!(
        r#"Extract cryptocurrency token symbols or names from the user's request.

User request: "{user_request}"

The user might request single or multiple tokens:
- "What's the score of SOL?" -> tokens: ["sol"]
- "Give me the rating for solana" -> tokens: ["solana"]
- "Analyze ETH and BTC" -> tokens: ["eth", "btc"]
- "Compare SOL, USDC and BONK" -> tokens: ["sol", "usdc", "bonk"]
- "gauge for USDC and ETH" -> tokens: ["usdc", "eth"]
- "Token rating for BTC, ETH, and SOL" -> tokens: ["btc", "eth", "sol"]

Extract and return ONLY a JSON object:
{{
  "tokens": ["symbol1", "symbol2", ...] (all lowercase, array of strings),
  "confidence": "high/medium/low"
}}

IMPORTANT:
- Always return an array of tokens, even for a single token
- Keep tokens in lowercase
- Only extract valid cryptocurrency symbols/names

Return only the JSON object, no other text."#
    )
}

fn score_block(score: &TokenScore) -> String {
    format!(
        "### {} ({})\n\
         - Fundamental Score: {}/100\n\
         - Global Gauge: {:.1}/100\n\
         - Community: {:.1}\n\
         - Liquidity: {:.1}\n\
         - Momentum: {:.1}\n\
         - Security: {:.1}\n\
         - Technology: {}\n\
         - Tokenomics: {:.1}\n",
        score.name,
        score.symbol.to_uppercase(),
        score.fundamental_score,
        score.global_gauge,
        score.community_gauge,
        score.liquidity_gauge,
        score.momentum_gauge,
        score.security_gauge,
        fmt_gauge(score.technology_gauge),
        score.tokenomics_gauge,
    )
}

/// Narration prompt for the explicit-query flow. A lone found token with no
/// misses gets the detailed single-token brief; anything else gets the
/// comparison form.
pub fn token_scores_prompt(scores: &[TokenScore], not_found: &[String]) -> String {
    if scores.len() == 1 && not_found.is_empty() {
        let score = &scores[0];
        return format!(
            "## TOKEN GAUGE ANALYSIS REQUEST\n\n\
             ## TOKEN INFORMATION\n\
             - Name: {}\n\
             - Symbol: {}\n\
             - CoinGecko ID: {}\n\
             - CMC ID: {}\n\n\
             ## FUNDAMENTAL SCORE\n\
             - Score: {}/100\n\n\
             ## GAUGES (0-100 scale)\n\
             - Global Gauge: {:.1}\n\
             - Community Gauge: {:.1}\n\
             - Liquidity Gauge: {:.1}\n\
             - Momentum Gauge: {:.1}\n\
             - Security Gauge: {:.1}\n\
             - Technology Gauge: {}\n\
             - Tokenomics Gauge: {:.1}\n\n\
             ## INSTRUCTIONS\n\
             Provide a natural, conversational analysis of this token based on the gauge data above.\n\n\
             RESPONSE GUIDELINES:\n\
             - Start with the token name and fundamental score\n\
             - Present the gauges in an organized, readable format\n\
             - Highlight the strongest metrics (highest scores)\n\
             - Mention any weak points if relevant (low scores)\n\
             - If the technology gauge is N/A, briefly note it\n\
             - Use markdown formatting for structure (bold for headers, bullet points for lists)\n\
             - Use appropriate emojis sparingly (📊 for scores, ✅ for high scores, ⚠️ for low ones)\n\
             - Keep it concise but informative (4-8 lines total)\n\n\
             DO NOT:\n\
             - Simply repeat the numbers without context\n\
             - Be overly technical\n\
             - Give financial advice\n\
             - Make predictions about price",
            score.name,
            score.symbol.to_uppercase(),
            score.cg_id,
            score.cmc_id,
            score.fundamental_score,
            score.global_gauge,
            score.community_gauge,
            score.liquidity_gauge,
            score.momentum_gauge,
            score.security_gauge,
            fmt_gauge(score.technology_gauge),
            score.tokenomics_gauge,
        );
    }

    let blocks: Vec<String> = scores.iter().map(score_block).collect();
    let not_found_section = if not_found.is_empty() {
        String::new()
    } else {
        format!("\n## TOKENS NOT FOUND\n{}\n", not_found.join(", "))
    };

    format!(
        "## MULTI-TOKEN GAUGE ANALYSIS REQUEST\n\n\
         ## ANALYZED TOKENS\n\
         Total requested: {}\n\
         Successfully analyzed: {}\n\
         Not found: {}\n\n\
         ## TOKEN SCORES DATA\n\n\
         {}\
         {}\n\
         ## INSTRUCTIONS\n\
         Provide a natural, conversational comparison of these tokens based on the gauge data above.\n\n\
         RESPONSE GUIDELINES:\n\
         - Compare the tokens highlighting key differences\n\
         - Identify the strongest performer overall (highest global gauge)\n\
         - Mention standout metrics for each token\n\
         - If comparing 2-3 tokens, provide detailed comparison\n\
         - If comparing 4+ tokens, group by performance tiers (excellent/good/average)\n\
         - Use markdown formatting and appropriate emojis\n\
         - Be concise but informative\n\
         - If tokens weren't found, mention them at the end\n\n\
         DO NOT:\n\
         - Simply list the numbers without context\n\
         - Give financial advice or investment recommendations\n\
         - Make price predictions",
        scores.len() + not_found.len(),
        scores.len(),
        not_found.len(),
        blocks.join("\n"),
        not_found_section,
    )
}

fn band_section(scores: &[TokenScore]) -> String {
    if scores.is_empty() {
        return "- None".to_string();
    }
    scores
        .iter()
        .map(|s| {
            format!(
                "- {} ({}): Global {:.1}, Fundamental {}",
                s.symbol.to_uppercase(),
                s.name,
                s.global_gauge,
                s.fundamental_score,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Narration prompt for the wallet-analysis flow: portfolio averages plus the
/// four score-band groupings.
pub fn wallet_scores_prompt(
    breakdown: &WalletBreakdown,
    not_found: &[String],
    total_tokens: usize,
) -> String {
    let not_found_line = if not_found.is_empty() {
        "None".to_string()
    } else {
        not_found.join(", ")
    };

    format!(
        "## WALLET GAUGE ANALYSIS REQUEST\n\n\
         ## WALLET DATA\n\
         - Total tokens in wallet: {}\n\
         - Tokens found in the gauge database: {}\n\
         - Tokens not found: {}\n\n\
         ## AVERAGE SCORES\n\
         - Global Gauge Average: {:.1}/100\n\
         - Fundamental Score Average: {:.0}/100\n\n\
         ## TOKENS BY SCORE CATEGORY\n\n\
         ### Excellent Scores (>=80)\n\
         {}\n\n\
         ### Good Scores (65-79)\n\
         {}\n\n\
         ### Average Scores (50-64)\n\
         {}\n\n\
         ### Poor Scores (<50)\n\
         {}\n\n\
         ## INSTRUCTIONS\n\
         Provide a natural, conversational analysis of the user's wallet based on the gauge data above.\n\n\
         RESPONSE GUIDELINES:\n\
         - Use a structured format with bullet points and line breaks\n\
         - Start with an overview of the wallet's average scores\n\
         - Highlight the best performing tokens (excellent scores)\n\
         - Mention any concerning tokens (poor scores) if present\n\
         - Provide brief insights about portfolio quality and diversification\n\
         - If tokens weren't found, mention them briefly at the end\n\
         - Use emojis appropriately (✅ for excellent, 👍 for good, ⚠️ for average/poor)\n\
         - Use markdown formatting for readability (bullet points, bold for headers)\n\
         - Keep it clear, actionable, and encouraging\n\n\
         DO NOT:\n\
         - Write a single long paragraph\n\
         - Simply repeat the data\n\
         - Use technical jargon unnecessarily\n\
         - Be overly negative\n\
         - Give financial advice",
        total_tokens,
        breakdown.analyzed(),
        not_found_line,
        breakdown.avg_global,
        breakdown.avg_fundamental,
        band_section(&breakdown.excellent),
        band_section(&breakdown.good),
        band_section(&breakdown.average),
        band_section(&breakdown.poor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_score;

    #[test]
    fn extraction_prompt_embeds_request_and_schema() {
        let prompt = extract_symbols_prompt("Compare SOL, USDC and BONK");
        assert!(prompt.contains("Compare SOL, USDC and BONK"));
        assert!(prompt.contains("\"tokens\""));
        assert!(prompt.contains("\"confidence\""));
        assert!(prompt.contains("lowercase"));
    }

    #[test]
    fn single_token_prompt_uses_detailed_form() {
        let scores = vec![sample_score("SOL", 88.9, 66.0, Some(68.5))];
        let prompt = token_scores_prompt(&scores, &[]);
        assert!(prompt.contains("## TOKEN GAUGE ANALYSIS REQUEST"));
        assert!(prompt.contains("CoinGecko ID"));
        assert!(prompt.contains("Technology Gauge: 68.5"));
        assert!(prompt.contains("Give financial advice"));
    }

    #[test]
    fn single_token_with_misses_uses_comparison_form() {
        let scores = vec![sample_score("SOL", 88.9, 66.0, Some(68.5))];
        let not_found = vec!["BONK".to_string()];
        let prompt = token_scores_prompt(&scores, &not_found);
        assert!(prompt.contains("## MULTI-TOKEN GAUGE ANALYSIS REQUEST"));
        assert!(prompt.contains("Total requested: 2"));
        assert!(prompt.contains("## TOKENS NOT FOUND\nBONK"));
    }

    #[test]
    fn missing_technology_renders_na() {
        let scores = vec![sample_score("BONK", 52.1, 41.0, None)];
        let prompt = token_scores_prompt(&scores, &[]);
        assert!(prompt.contains("Technology Gauge: N/A"));
        assert!(!prompt.contains("Technology Gauge: 0"));
    }

    #[test]
    fn wallet_prompt_contains_bands_and_averages() {
        let scores = vec![
            sample_score("SOL", 88.9, 66.0, Some(68.5)),
            sample_score("USDC", 94.2, 83.0, Some(89.3)),
            sample_score("BONK", 42.0, 30.0, None),
        ];
        let breakdown = WalletBreakdown::from_scores(&scores);
        let prompt = wallet_scores_prompt(&breakdown, &["WIF".to_string()], 4);

        assert!(prompt.contains("Total tokens in wallet: 4"));
        assert!(prompt.contains("### Excellent Scores (>=80)"));
        assert!(prompt.contains("### Poor Scores (<50)"));
        assert!(prompt.contains("SOL (SOL)"));
        assert!(prompt.contains("WIF"));
        assert!(prompt.contains("Global Gauge Average"));
    }

    #[test]
    fn wallet_prompt_empty_bands_say_none() {
        let breakdown = WalletBreakdown::from_scores(&[]);
        let prompt = wallet_scores_prompt(&breakdown, &[], 0);
        assert!(prompt.contains("### Excellent Scores (>=80)\n- None"));
        assert!(prompt.contains("Tokens not found: None"));
    }
}
