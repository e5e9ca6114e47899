use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokengauge_client::TokenSearch;
use tokengauge_models::{ActionResponse, TokenScoresData, WalletPortfolio, WalletScoresData};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::composer::{narrate, scores_fallback, wallet_fallback, WalletBreakdown};
use crate::error::PluginError;
use crate::extractor::extract_symbols;
use crate::generator::TextGenerator;
use crate::lookup::lookup_scores;
use crate::prompts::{token_scores_prompt, wallet_scores_prompt};
use crate::runtime::{SharedCache, WALLET_CACHE_KEY};

/// What the host hands an action on invocation.
pub struct ActionContext {
    pub message_text: String,
}

/// One host-invocable action. The handler must always return a well-formed
/// response; internal failures are converted, logged, and never propagated.
#[async_trait]
pub trait PluginAction: Send + Sync {
    fn name(&self) -> &'static str;
    fn similes(&self) -> &'static [&'static str];
    fn description(&self) -> &'static str;

    async fn validate(&self, ctx: &ActionContext) -> bool;
    async fn handle(&self, ctx: &ActionContext) -> ActionResponse;
}

const NO_TOKENS_TEXT: &str = "I could not identify the tokens to analyze. \
     Could you specify the symbols? (e.g. SOL, ETH, USDC)";

/// Explicit-query action: extract symbols from the message, look them up,
/// narrate the result.
pub struct GetTokenScoresAction {
    search: Arc<dyn TokenSearch>,
    generator: Arc<dyn TextGenerator>,
    lookup_delay: Duration,
}

impl GetTokenScoresAction {
    pub fn new(
        search: Arc<dyn TokenSearch>,
        generator: Arc<dyn TextGenerator>,
        lookup_delay: Duration,
    ) -> Self {
        Self {
            search,
            generator,
            lookup_delay,
        }
    }

    async fn run(&self, ctx: &ActionContext) -> Result<ActionResponse, PluginError> {
        let extraction = extract_symbols(self.generator.as_ref(), &ctx.message_text).await;

        if extraction.tokens.is_empty() {
            return Ok(ActionResponse::failure(NO_TOKENS_TEXT));
        }

        info!(tokens = ?extraction.tokens, "fetching gauge scores");
        let outcome =
            lookup_scores(self.search.as_ref(), &extraction.tokens, self.lookup_delay).await;

        if outcome.found.is_empty() {
            let requested: Vec<String> = extraction
                .tokens
                .iter()
                .map(|t| t.to_uppercase())
                .collect();
            let text = format!(
                "None of the requested tokens ({}) were found in the gauge database.",
                requested.join(", ")
            );
            return Ok(ActionResponse::failure_with_data(
                text,
                serde_json::json!({ "notFound": requested }),
            ));
        }

        let prompt = token_scores_prompt(&outcome.found, &outcome.not_found);
        let fallback = scores_fallback(outcome.found.len());
        let text = narrate(self.generator.as_ref(), &prompt, fallback).await;

        let data = TokenScoresData {
            total_requested: extraction.tokens.len(),
            scores: outcome.found,
            not_found: outcome.not_found,
        };
        Ok(ActionResponse::ok(text, serde_json::to_value(data)?))
    }
}

#[async_trait]
impl PluginAction for GetTokenScoresAction {
    fn name(&self) -> &'static str {
        "GET_TOKEN_GAUGE_SCORES"
    }

    fn similes(&self) -> &'static [&'static str] {
        &[
            "TOKEN_SCORE",
            "TOKEN_GAUGE",
            "TOKEN_ANALYSIS",
            "TOKEN_RATING",
            "SCORE_TOKEN",
            "GAUGE_TOKEN",
        ]
    }

    fn description(&self) -> &'static str {
        "Get gauge scores and fundamental analysis for one or more specific cryptocurrency tokens."
    }

    async fn validate(&self, _ctx: &ActionContext) -> bool {
        // Similes already handle action matching.
        true
    }

    async fn handle(&self, ctx: &ActionContext) -> ActionResponse {
        let request_id = Uuid::new_v4();
        info!(%request_id, action = self.name(), "starting token score fetch");

        match self.run(ctx).await {
            Ok(response) => response,
            Err(e) => {
                error!(%request_id, error = %e, "token score action failed");
                ActionResponse::failure(format!("Error while fetching gauge scores: {e}"))
            }
        }
    }
}

/// Wallet-analysis action: read the externally-cached portfolio, score every
/// held token, narrate the breakdown.
pub struct GetWalletScoresAction {
    search: Arc<dyn TokenSearch>,
    generator: Arc<dyn TextGenerator>,
    cache: Arc<dyn SharedCache>,
    lookup_delay: Duration,
}

impl GetWalletScoresAction {
    pub fn new(
        search: Arc<dyn TokenSearch>,
        generator: Arc<dyn TextGenerator>,
        cache: Arc<dyn SharedCache>,
        lookup_delay: Duration,
    ) -> Self {
        Self {
            search,
            generator,
            cache,
            lookup_delay,
        }
    }

    async fn read_portfolio(&self) -> Result<Option<WalletPortfolio>, PluginError> {
        let Some(value) = self.cache.get_json(WALLET_CACHE_KEY).await? else {
            return Ok(None);
        };
        let portfolio: WalletPortfolio = serde_json::from_value(value)?;
        Ok(Some(portfolio))
    }

    /// Lowercased symbols of held assets, dropping blanks and the wallet
    /// plugin's literal "unknown" placeholder.
    fn held_symbols(portfolio: &WalletPortfolio) -> Vec<String> {
        portfolio
            .items
            .iter()
            .map(|item| item.symbol.to_lowercase())
            .filter(|symbol| !symbol.is_empty() && symbol != "unknown")
            .collect()
    }

    async fn run(&self) -> Result<ActionResponse, PluginError> {
        let Some(portfolio) = self.read_portfolio().await? else {
            return Ok(ActionResponse::failure("No tokens found in your wallet."));
        };
        if portfolio.items.is_empty() {
            return Ok(ActionResponse::failure("No tokens found in your wallet."));
        }

        info!(items = portfolio.items.len(), "found wallet tokens");

        let symbols = Self::held_symbols(&portfolio);
        if symbols.is_empty() {
            return Ok(ActionResponse::failure(
                "No valid token symbols found in your wallet.",
            ));
        }

        let outcome = lookup_scores(self.search.as_ref(), &symbols, self.lookup_delay).await;

        let breakdown = WalletBreakdown::from_scores(&outcome.found);
        let prompt = wallet_scores_prompt(&breakdown, &outcome.not_found, symbols.len());
        let text = narrate(self.generator.as_ref(), &prompt, wallet_fallback()).await;

        let data = WalletScoresData {
            total_tokens: symbols.len(),
            analyzed_tokens: outcome.found.len(),
            not_found_tokens: outcome.not_found,
            scores: outcome.found,
        };
        Ok(ActionResponse::ok(text, serde_json::to_value(data)?))
    }
}

#[async_trait]
impl PluginAction for GetWalletScoresAction {
    fn name(&self) -> &'static str {
        "GET_WALLET_GAUGE_SCORES"
    }

    fn similes(&self) -> &'static [&'static str] {
        &[
            "ANALYZE_WALLET",
            "WALLET_ANALYSIS",
            "PORTFOLIO_ANALYSIS",
            "MY_WALLET",
            "MY_PORTFOLIO",
            "MY_TOKENS",
            "WALLET_OVERVIEW",
            "PORTFOLIO_OVERVIEW",
        ]
    }

    fn description(&self) -> &'static str {
        "Get gauge scores and fundamental analysis for every token in the user's wallet."
    }

    /// Eligible only while the wallet collaborator has published a non-empty
    /// portfolio snapshot.
    async fn validate(&self, _ctx: &ActionContext) -> bool {
        match self.read_portfolio().await {
            Ok(Some(portfolio)) => !portfolio.items.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "wallet portfolio unavailable during validate");
                false
            }
        }
    }

    async fn handle(&self, _ctx: &ActionContext) -> ActionResponse {
        let request_id = Uuid::new_v4();
        info!(%request_id, action = self.name(), "starting wallet scores fetch");

        match self.run().await {
            Ok(response) => response,
            Err(e) => {
                error!(%request_id, error = %e, "wallet scores action failed");
                ActionResponse::failure(format!("Error while analyzing the wallet: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_portfolio_json, MockCache, MockGenerator, MockSearch};

    fn wallet_action(cache: MockCache) -> GetWalletScoresAction {
        GetWalletScoresAction::new(
            Arc::new(MockSearch::with_records(vec![])),
            Arc::new(MockGenerator::failing()),
            Arc::new(cache),
            Duration::from_millis(1),
        )
    }

    #[tokio::test]
    async fn token_action_always_validates() {
        let action = GetTokenScoresAction::new(
            Arc::new(MockSearch::with_records(vec![])),
            Arc::new(MockGenerator::failing()),
            Duration::from_millis(1),
        );
        let ctx = ActionContext {
            message_text: "anything".to_string(),
        };
        assert!(action.validate(&ctx).await);
    }

    #[tokio::test]
    async fn wallet_validate_requires_cached_portfolio() {
        let ctx = ActionContext {
            message_text: String::new(),
        };

        let action = wallet_action(MockCache::empty());
        assert!(!action.validate(&ctx).await);

        let action = wallet_action(MockCache::with_value(sample_portfolio_json(&["SOL"])));
        assert!(action.validate(&ctx).await);
    }

    #[tokio::test]
    async fn wallet_validate_rejects_empty_portfolio() {
        let ctx = ActionContext {
            message_text: String::new(),
        };
        let action = wallet_action(MockCache::with_value(sample_portfolio_json(&[])));
        assert!(!action.validate(&ctx).await);
    }

    #[tokio::test]
    async fn wallet_validate_survives_cache_failure() {
        let ctx = ActionContext {
            message_text: String::new(),
        };
        let action = wallet_action(MockCache::failing());
        assert!(!action.validate(&ctx).await);
    }

    #[tokio::test]
    async fn wallet_handle_converts_cache_failure_to_response() {
        let ctx = ActionContext {
            message_text: String::new(),
        };
        let action = wallet_action(MockCache::failing());
        let response = action.handle(&ctx).await;
        assert!(!response.success);
        assert!(response.text.contains("Error while analyzing the wallet"));
    }
}
