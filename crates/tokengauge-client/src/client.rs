use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tokengauge_models::{GaugeRecord, ScoreQueryConfig};
use tracing::{error, info, warn};

use crate::error::ClientError;
use crate::search::TokenSearch;

/// Authenticated client for the gauge search API.
///
/// Holds the resolved credentials by value; nothing here mutates after
/// construction, so one instance can serve concurrent requests.
pub struct ScoreApiClient {
    http: reqwest::Client,
    config: ScoreQueryConfig,
}

/// Map a non-2xx upstream status to the lookup outcome: 404 is the normal
/// "token absent" result, anything else is a typed failure carrying the body.
fn interpret_failure_status(
    query: &str,
    status: StatusCode,
    body: String,
) -> Result<Option<GaugeRecord>, ClientError> {
    if status == StatusCode::NOT_FOUND {
        warn!(query, "token not found in gauge database");
        return Ok(None);
    }
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Collapse a typed lookup result into the caller-visible shape: errors are
/// logged and reported as `None`, indistinguishable from "token absent".
fn fold_lookup(
    query: &str,
    result: Result<Option<GaugeRecord>, ClientError>,
) -> Option<GaugeRecord> {
    match result {
        Ok(record) => record,
        Err(e) => {
            error!(query, error = %e, "gauge API lookup failed");
            None
        }
    }
}

impl ScoreApiClient {
    pub fn new(config: ScoreQueryConfig, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Look up a token by symbol or name, keeping the error taxonomy visible.
    ///
    /// `Ok(None)` is the normal "token not found" outcome (HTTP 404). Any
    /// other non-2xx status or transport fault is an `Err`; the [`TokenSearch`]
    /// impl folds those into `None` for callers.
    pub async fn try_search_token(&self, query: &str) -> Result<Option<GaugeRecord>, ClientError> {
        let url = format!(
            "{}/gauges/v1/search",
            self.config.base_url.trim_end_matches('/')
        );

        // HTTP basic auth: API key as the username, empty password.
        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .basic_auth(&self.config.api_key, Some(""))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return interpret_failure_status(query, status, body);
        }

        let record: GaugeRecord = response.json().await?;
        info!(
            query,
            symbol = %record.symbol,
            name = %record.name,
            global_gauge = record.gauges.global_gauge,
            "gauge data retrieved"
        );
        Ok(Some(record))
    }
}

#[async_trait]
impl TokenSearch for ScoreApiClient {
    /// Folding lookup: upstream errors are logged and reported as `None`,
    /// indistinguishable from "token absent" to callers.
    async fn search_token(&self, query: &str) -> Option<GaugeRecord> {
        fold_lookup(query, self.try_search_token(query).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokengauge_models::{Gauges, Scores, ScoringFundamental};

    fn test_config() -> ScoreQueryConfig {
        ScoreQueryConfig {
            api_key: "test-key".to_string(),
            base_url: "https://gauges.example.com".to_string(),
        }
    }

    fn record(symbol: &str) -> GaugeRecord {
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
                global_gauge: 50.0,
                community_gauge: 50.0,
                liquidity_gauge: 50.0,
                momentum_gauge: 50.0,
                security_gauge: 50.0,
                technology_gauge: None,
                tokenomics_gauge: 50.0,
            },
        }
    }

    #[test]
    fn construction_succeeds() {
        let client = ScoreApiClient::new(test_config(), Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url(), "https://gauges.example.com");
    }

    #[test]
    fn status_error_is_observable() {
        let err = ClientError::Status {
            status: 500,
            body: "upstream broke".to_string(),
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn not_found_status_is_the_absent_outcome() {
        let outcome = interpret_failure_status("bonk", StatusCode::NOT_FOUND, String::new());
        assert_eq!(outcome.unwrap(), None);
    }

    #[test]
    fn other_failure_statuses_carry_a_typed_error() {
        let err = interpret_failure_status(
            "sol",
            StatusCode::INTERNAL_SERVER_ERROR,
            "upstream broke".to_string(),
        )
        .unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream broke");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn folded_failure_is_indistinguishable_from_not_found() {
        let failure = Err(ClientError::Status {
            status: 500,
            body: "upstream broke".to_string(),
        });
        assert_eq!(fold_lookup("sol", failure), None);
        assert_eq!(fold_lookup("sol", Ok(None)), None);
    }

    #[test]
    fn folded_success_passes_the_record_through() {
        let folded = fold_lookup("sol", Ok(Some(record("sol"))));
        assert_eq!(folded.unwrap().symbol, "SOL");
    }
}
