use tokengauge_models::{ScoreBand, TokenScore};
use tracing::warn;

use crate::generator::TextGenerator;

/// Canned fallback for the explicit-query flow when narration yields nothing.
pub fn scores_fallback(found: usize) -> String {
    format!("Retrieved gauge scores for {found} token(s).")
}

/// Canned fallback for the wallet flow.
pub fn wallet_fallback() -> String {
    "Wallet gauge analysis complete.".to_string()
}

/// Portfolio aggregates for the wallet narration prompt: mean scores plus the
/// found tokens partitioned into the four bands by global gauge.
#[derive(Debug, Clone, Default)]
pub struct WalletBreakdown {
    pub avg_global: f64,
    pub avg_fundamental: f64,
    pub excellent: Vec<TokenScore>,
    pub good: Vec<TokenScore>,
    pub average: Vec<TokenScore>,
    pub poor: Vec<TokenScore>,
}

impl WalletBreakdown {
    pub fn from_scores(scores: &[TokenScore]) -> Self {
        let mut breakdown = Self::default();
        if scores.is_empty() {
            return breakdown;
        }

        let n = scores.len() as f64;
        breakdown.avg_global = scores.iter().map(|s| s.global_gauge).sum::<f64>() / n;
        breakdown.avg_fundamental = scores.iter().map(|s| s.fundamental_score).sum::<f64>() / n;

        for score in scores {
            let bucket = match ScoreBand::of(score.global_gauge) {
                ScoreBand::Excellent => &mut breakdown.excellent,
                ScoreBand::Good => &mut breakdown.good,
                ScoreBand::Average => &mut breakdown.average,
                ScoreBand::Poor => &mut breakdown.poor,
            };
            bucket.push(score.clone());
        }
        breakdown
    }

    pub fn analyzed(&self) -> usize {
        self.excellent.len() + self.good.len() + self.average.len() + self.poor.len()
    }
}

/// Ask the model to narrate a prompt; degrade to the canned fallback on a
/// failed call or an empty reply. Narration never hard-fails a request.
pub async fn narrate(generator: &dyn TextGenerator, prompt: &str, fallback: String) -> String {
    match generator.generate(prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("model returned empty narration, using fallback");
            fallback
        }
        Err(e) => {
            warn!(error = %e, "narration call failed, using fallback");
            fallback
        }
    }
}
