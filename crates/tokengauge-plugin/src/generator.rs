use async_trait::async_trait;

use crate::error::PluginError;

/// The one model capability this plugin needs: prompt in, plain text out.
///
/// The host runtime supplies the implementation (whatever model-invocation API
/// it carries); tests use `test_support::MockGenerator`. No streaming and no
/// tool calls, so a single method covers both the extraction and narration
/// call sites.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, PluginError>;
}
