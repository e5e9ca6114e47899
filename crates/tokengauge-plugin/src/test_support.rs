//! Shared mocks and fixtures for unit and integration tests: a scripted
//! text generator, an in-memory token search, map-backed host settings,
//! and a canned shared cache.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokengauge_client::TokenSearch;
use tokengauge_models::{
    GaugeRecord, Gauges, Scores, ScoringFundamental, TokenScore, WalletPortfolio,
};

use crate::error::PluginError;
use crate::generator::TextGenerator;
use crate::runtime::{HostSettings, SharedCache};

/// A text generator that replays scripted responses in order and records
/// every prompt it receives. Once the script runs out it fails, so
/// `failing()` is just an empty script.
pub struct MockGenerator {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn with_responses(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, PluginError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(msg)) => Err(PluginError::Model(msg)),
            None => Err(PluginError::Model("no scripted response left".to_string())),
        }
    }
}

/// In-memory token search keyed by case-insensitive symbol. Records every
/// query so tests can assert lookup counts and order.
pub struct MockSearch {
    records: HashMap<String, GaugeRecord>,
    calls: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn with_records(records: Vec<GaugeRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.symbol.to_lowercase(), r))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenSearch for MockSearch {
    async fn search_token(&self, query: &str) -> Option<GaugeRecord> {
        self.calls.lock().unwrap().push(query.to_string());
        self.records.get(&query.to_lowercase()).cloned()
    }
}

/// Host settings backed by a plain map.
pub struct MapSettings {
    values: HashMap<String, String>,
}

impl MapSettings {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            values: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl HostSettings for MapSettings {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Shared cache returning one canned value for every key, or failing
/// outright.
pub struct MockCache {
    value: Option<serde_json::Value>,
    fail: bool,
}

impl MockCache {
    pub fn empty() -> Self {
        Self {
            value: None,
            fail: false,
        }
    }

    pub fn with_value(value: serde_json::Value) -> Self {
        Self {
            value: Some(value),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            value: None,
            fail: true,
        }
    }
}

#[async_trait]
impl SharedCache for MockCache {
    async fn get_json(&self, _key: &str) -> Result<Option<serde_json::Value>, PluginError> {
        if self.fail {
            return Err(PluginError::Cache("cache backend unavailable".to_string()));
        }
        Ok(self.value.clone())
    }
}

/// A fully-populated gauge record with the given symbol and headline scores.
/// Name and CoinGecko id are derived from the symbol.
pub fn sample_record(
    symbol: &str,
    global: f64,
    fundamental: f64,
    technology: Option<f64>,
) -> GaugeRecord {
    GaugeRecord {
        name: symbol.to_string(),
        symbol: symbol.to_string(),
        cg_id: symbol.to_lowercase(),
        cmc_id: "1".to_string(),
        scores: Scores {
            scoring_fundamental: ScoringFundamental {
                fundamental_score: fundamental,
            },
        },
        gauges: Gauges {
            global_gauge: global,
            community_gauge: 70.0,
            liquidity_gauge: 70.0,
            momentum_gauge: 70.0,
            security_gauge: 70.0,
            technology_gauge: technology,
            tokenomics_gauge: 70.0,
        },
    }
}

pub fn sample_score(
    symbol: &str,
    global: f64,
    fundamental: f64,
    technology: Option<f64>,
) -> TokenScore {
    TokenScore::from(&sample_record(symbol, global, fundamental, technology))
}

/// Cacheable wallet snapshot holding one item per symbol, serialized the way
/// the wallet collaborator writes it.
pub fn sample_portfolio_json(symbols: &[&str]) -> serde_json::Value {
    let portfolio = WalletPortfolio {
        total_usd: "1000.00".to_string(),
        total_sol: "5.0".to_string(),
        items: symbols
            .iter()
            .map(|symbol| tokengauge_models::PortfolioItem {
                name: symbol.to_string(),
                symbol: symbol.to_string(),
                address: String::new(),
                balance: "1000000".to_string(),
                ui_amount: "1.0".to_string(),
                price_usd: "1.00".to_string(),
                value_usd: "1.00".to_string(),
            })
            .collect(),
    };
    serde_json::to_value(portfolio).unwrap()
}
