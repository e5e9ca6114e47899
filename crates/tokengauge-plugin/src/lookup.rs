use std::time::Duration;

use tokengauge_client::{search_many, TokenSearch};
use tokengauge_models::LookupOutcome;
use tracing::info;

/// Look up each symbol sequentially and partition into found scores and
/// uppercased not-found symbols, both in lookup order.
///
/// Callers short-circuit on an empty symbol list before reaching this point;
/// an empty input simply yields an empty outcome.
pub async fn lookup_scores(
    search: &dyn TokenSearch,
    symbols: &[String],
    delay: Duration,
) -> LookupOutcome {
    let results = search_many(search, symbols, delay).await;

    let mut outcome = LookupOutcome::default();
    for (symbol, result) in symbols.iter().zip(results) {
        match result {
            Some(score) => outcome.found.push(score),
            None => outcome.not_found.push(symbol.to_uppercase()),
        }
    }

    info!(
        requested = symbols.len(),
        found = outcome.found.len(),
        not_found = outcome.not_found.len(),
        "token lookup complete"
    );
    outcome
}
