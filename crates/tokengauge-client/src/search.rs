use std::time::Duration;

use async_trait::async_trait;
use tokengauge_models::{GaugeRecord, TokenScore};
use tracing::debug;

/// Single-token lookup seam. The production impl is [`crate::ScoreApiClient`];
/// tests substitute a deterministic mock.
///
/// `None` covers both "token absent" and "upstream failed" (the failure detail
/// is logged inside the impl).
#[async_trait]
pub trait TokenSearch: Send + Sync {
    async fn search_token(&self, query: &str) -> Option<GaugeRecord>;
}

/// Sequential multi-symbol lookup with an enforced minimum delay between
/// consecutive calls. Results are index-aligned with `queries`.
///
/// Intentionally not concurrent: the upstream rate-limit tolerance is unknown,
/// so lookups are throttled one at a time.
pub async fn search_many(
    search: &dyn TokenSearch,
    queries: &[String],
    delay: Duration,
) -> Vec<Option<TokenScore>> {
    let mut results = Vec::with_capacity(queries.len());
    for (i, query) in queries.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(delay).await;
        }
        debug!(query, position = i, "looking up token");
        let record = search.search_token(query).await;
        results.push(record.as_ref().map(TokenScore::from));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Instant;
    use tokengauge_models::{Gauges, Scores, ScoringFundamental};

    pub(crate) fn record(symbol: &str, global: f64) -> GaugeRecord {
        GaugeRecord {
            name: symbol.to_string(),
            symbol: symbol.to_uppercase(),
            cg_id: symbol.to_lowercase(),
            cmc_id: "1".to_string(),
            scores: Scores {
                scoring_fundamental: ScoringFundamental {
                    fundamental_score: 50.0,
                },
            },
            gauges: Gauges {
                global_gauge: global,
                community_gauge: 50.0,
                liquidity_gauge: 50.0,
                momentum_gauge: 50.0,
                security_gauge: 50.0,
                technology_gauge: None,
                tokenomics_gauge: 50.0,
            },
        }
    }

    struct MapSearch {
        records: HashMap<String, GaugeRecord>,
        calls: Mutex<Vec<(String, Instant)>>,
    }

    impl MapSearch {
        fn new(records: Vec<GaugeRecord>) -> Self {
            Self {
                records: records
                    .into_iter()
                    .map(|r| (r.symbol.to_lowercase(), r))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TokenSearch for MapSearch {
        async fn search_token(&self, query: &str) -> Option<GaugeRecord> {
            self.calls
                .lock()
                .unwrap()
                .push((query.to_string(), Instant::now()));
            self.records.get(&query.to_lowercase()).cloned()
        }
    }

    #[tokio::test]
    async fn results_align_with_input_order() {
        let search = MapSearch::new(vec![record("sol", 88.9), record("usdc", 94.2)]);
        let queries = vec!["sol".to_string(), "bonk".to_string(), "usdc".to_string()];

        let results = search_many(&search, &queries, Duration::from_millis(1)).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().symbol, "SOL");
        assert!(results[1].is_none());
        assert_eq!(results[2].as_ref().unwrap().symbol, "USDC");
    }

    #[tokio::test]
    async fn issues_exactly_n_sequential_lookups_with_delay() {
        let search = MapSearch::new(vec![record("sol", 88.9)]);
        let queries = vec![
            "sol".to_string(),
            "eth".to_string(),
            "btc".to_string(),
        ];
        let delay = Duration::from_millis(20);

        let start = Instant::now();
        search_many(&search, &queries, delay).await;
        let elapsed = start.elapsed();

        let calls = search.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        // Total time must cover (N-1) inter-request delays.
        assert!(
            elapsed >= delay * 2,
            "expected >= {:?}, got {:?}",
            delay * 2,
            elapsed
        );
        // Each consecutive pair is spaced by at least the delay.
        for pair in calls.windows(2) {
            let gap = pair[1].1.duration_since(pair[0].1);
            assert!(gap >= delay, "gap {gap:?} below configured delay");
        }
    }

    #[tokio::test]
    async fn empty_input_issues_no_lookups() {
        let search = MapSearch::new(vec![]);
        let results = search_many(&search, &[], Duration::from_millis(20)).await;
        assert!(results.is_empty());
        assert!(search.calls.lock().unwrap().is_empty());
    }
}
