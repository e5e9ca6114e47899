use serde::{Deserialize, Serialize};

/// Credentials and endpoint for the gauge API. Immutable once resolved;
/// absence of either value disables the plugin for the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreQueryConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Ambient knobs for the plugin, distinct from the required credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginConfig {
    /// Timeout applied to each outbound HTTP request, in milliseconds.
    pub request_timeout_ms: u64,
    /// Minimum delay between successive gauge lookups, in milliseconds.
    /// A deliberate throttle for the upstream rate limit, not tunable below
    /// upstream tolerance without checking first.
    pub rate_limit_delay_ms: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
            rate_limit_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_plugin_config() {
        let config = PluginConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PluginConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn default_values() {
        let config = PluginConfig::default();
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.rate_limit_delay_ms, 100);
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r#"
request_timeout_ms = 5000
rate_limit_delay_ms = 250
"#;
        let config: PluginConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.rate_limit_delay_ms, 250);
    }
}
