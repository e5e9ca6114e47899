use serde::{Deserialize, Serialize};

/// Fundamental composite rating block from the gauge search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringFundamental {
    pub fundamental_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scores {
    #[serde(rename = "scoringFundamental")]
    pub scoring_fundamental: ScoringFundamental,
}

/// The seven 0-100 gauges. `technology_gauge` is nullable upstream and must
/// stay `None` when absent (rendered as "N/A", never coerced to 0).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gauges {
    pub global_gauge: f64,
    pub community_gauge: f64,
    pub liquidity_gauge: f64,
    pub momentum_gauge: f64,
    pub security_gauge: f64,
    #[serde(default)]
    pub technology_gauge: Option<f64>,
    pub tokenomics_gauge: f64,
}

/// Raw response body of `GET /gauges/v1/search`, field names as served upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeRecord {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "cgId")]
    pub cg_id: String,
    #[serde(rename = "cmcId")]
    pub cmc_id: String,
    pub scores: Scores,
    pub gauges: Gauges,
}
