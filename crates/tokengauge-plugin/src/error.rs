use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("model invocation failed: {0}")]
    Model(String),

    #[error("host cache error: {0}")]
    Cache(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
