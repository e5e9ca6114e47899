use serde::{Deserialize, Serialize};

use crate::api::GaugeRecord;

/// Flattened projection of a [`GaugeRecord`] used by every response composer.
/// One-way derived, never mutated after creation. Serializes camelCase so the
/// shape matches the structured payload attached to action responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenScore {
    pub symbol: String,
    pub name: String,
    pub fundamental_score: f64,
    pub global_gauge: f64,
    pub community_gauge: f64,
    pub liquidity_gauge: f64,
    pub momentum_gauge: f64,
    pub security_gauge: f64,
    pub technology_gauge: Option<f64>,
    pub tokenomics_gauge: f64,
    pub cg_id: String,
    pub cmc_id: String,
}

impl From<&GaugeRecord> for TokenScore {
    fn from(record: &GaugeRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            fundamental_score: record.scores.scoring_fundamental.fundamental_score,
            global_gauge: record.gauges.global_gauge,
            community_gauge: record.gauges.community_gauge,
            liquidity_gauge: record.gauges.liquidity_gauge,
            momentum_gauge: record.gauges.momentum_gauge,
            security_gauge: record.gauges.security_gauge,
            technology_gauge: record.gauges.technology_gauge,
            tokenomics_gauge: record.gauges.tokenomics_gauge,
            cg_id: record.cg_id.clone(),
            cmc_id: record.cmc_id.clone(),
        }
    }
}

/// Score bands used by the wallet breakdown. Boundaries are inclusive-lower:
/// 80.0 is Excellent, 65.0 is Good, 50.0 is Average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 65.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Average
        } else {
            ScoreBand::Poor
        }
    }
}
