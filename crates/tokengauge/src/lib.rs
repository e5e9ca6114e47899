//! TokenGauge - crypto gauge-score plugin
//!
//! Looks up 0-100 gauge scores for cryptocurrency tokens from a
//! basic-auth score API, extracts token symbols from natural-language
//! requests via the host's text model, and analyzes wallet portfolios
//! published by a companion plugin.
//!
//! # Library Usage
//!
//! ```rust,ignore
//! use tokengauge::{build_plugin, models::PluginConfig};
//!
//! let plugin = build_plugin(&settings, generator, cache, PluginConfig::default())?;
//! for action in &plugin.actions {
//!     println!("{}", action.name());
//! }
//! ```

pub use tokengauge_client as client;
pub use tokengauge_models as models;
pub use tokengauge_plugin as plugin;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use tokengauge_client::ScoreApiClient;
use tokengauge_models::PluginConfig;
use tokengauge_plugin::{
    resolve_score_config, GetTokenScoresAction, GetWalletScoresAction, HostSettings,
    PluginAction, SharedCache, TextGenerator,
};

/// The assembled plugin: metadata plus the host-invocable actions.
pub struct TokenGaugePlugin {
    pub name: &'static str,
    pub description: &'static str,
    pub actions: Vec<Arc<dyn PluginAction>>,
    pub client: Arc<ScoreApiClient>,
}

/// Build the plugin from host settings and collaborators. Fails fast when
/// the API credentials are missing so the host surfaces a configuration
/// error at startup instead of a broken action at runtime.
pub fn build_plugin(
    settings: &dyn HostSettings,
    generator: Arc<dyn TextGenerator>,
    cache: Arc<dyn SharedCache>,
    config: PluginConfig,
) -> Result<TokenGaugePlugin, anyhow::Error> {
    let score_config = resolve_score_config(settings)
        .context("score API is not configured: set TOKENGAUGE_API_KEY and TOKENGAUGE_API_URL")?;

    let timeout = Duration::from_millis(config.request_timeout_ms);
    let client = Arc::new(
        ScoreApiClient::new(score_config, timeout).context("failed to build score API client")?,
    );
    info!(base_url = client.base_url(), "score API client ready");

    let delay = Duration::from_millis(config.rate_limit_delay_ms);
    let actions: Vec<Arc<dyn PluginAction>> = vec![
        Arc::new(GetTokenScoresAction::new(
            client.clone(),
            generator.clone(),
            delay,
        )),
        Arc::new(GetWalletScoresAction::new(
            client.clone(),
            generator,
            cache,
            delay,
        )),
    ];

    Ok(TokenGaugePlugin {
        name: "tokengauge",
        description: "Token gauge scores and wallet analysis backed by the score API",
        actions,
        client,
    })
}
