use async_trait::async_trait;
use tokengauge_models::ScoreQueryConfig;

use crate::error::PluginError;

/// Setting key for the gauge API key.
pub const API_KEY_SETTING: &str = "TOKENGAUGE_API_KEY";
/// Setting key for the gauge API base URL.
pub const API_URL_SETTING: &str = "TOKENGAUGE_API_URL";

/// Cache key under which the wallet plugin publishes its portfolio snapshot.
/// Owned and written by that collaborator; this plugin only reads it.
pub const WALLET_CACHE_KEY: &str = "solana/walletData";

/// Host-provided configuration lookup.
pub trait HostSettings: Send + Sync {
    fn get_setting(&self, key: &str) -> Option<String>;
}

/// Read-only view of the host's shared cache.
#[async_trait]
pub trait SharedCache: Send + Sync {
    async fn get_json(&self, key: &str) -> Result<Option<serde_json::Value>, PluginError>;
}

/// Resolve the required gauge API settings. Returns `None` when either value
/// is missing or blank after trimming; never panics. Callers that need the
/// client to exist treat `None` as a construction failure.
pub fn resolve_score_config(settings: &dyn HostSettings) -> Option<ScoreQueryConfig> {
    let api_key = settings.get_setting(API_KEY_SETTING)?;
    let base_url = settings.get_setting(API_URL_SETTING)?;

    let api_key = api_key.trim();
    let base_url = base_url.trim();
    if api_key.is_empty() || base_url.is_empty() {
        return None;
    }

    Some(ScoreQueryConfig {
        api_key: api_key.to_string(),
        base_url: base_url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MapSettings;

    #[test]
    fn resolves_when_both_present() {
        let settings = MapSettings::new(&[
            (API_KEY_SETTING, "sk-123"),
            (API_URL_SETTING, "https://gauges.example.com"),
        ]);
        let config = resolve_score_config(&settings).unwrap();
        assert_eq!(config.api_key, "sk-123");
        assert_eq!(config.base_url, "https://gauges.example.com");
    }

    #[test]
    fn trims_whitespace() {
        let settings = MapSettings::new(&[
            (API_KEY_SETTING, "  sk-123  "),
            (API_URL_SETTING, " https://gauges.example.com "),
        ]);
        let config = resolve_score_config(&settings).unwrap();
        assert_eq!(config.api_key, "sk-123");
    }

    #[test]
    fn absent_key_resolves_none() {
        let settings = MapSettings::new(&[(API_URL_SETTING, "https://gauges.example.com")]);
        assert!(resolve_score_config(&settings).is_none());
    }

    #[test]
    fn absent_url_resolves_none() {
        let settings = MapSettings::new(&[(API_KEY_SETTING, "sk-123")]);
        assert!(resolve_score_config(&settings).is_none());
    }

    #[test]
    fn blank_values_resolve_none() {
        let settings = MapSettings::new(&[
            (API_KEY_SETTING, "   "),
            (API_URL_SETTING, "https://gauges.example.com"),
        ]);
        assert!(resolve_score_config(&settings).is_none());

        let settings = MapSettings::new(&[(API_KEY_SETTING, "sk-123"), (API_URL_SETTING, "")]);
        assert!(resolve_score_config(&settings).is_none());
    }
}
