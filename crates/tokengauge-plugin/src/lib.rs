pub mod actions;
pub mod composer;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod lookup;
pub mod parser;
pub mod prompts;
pub mod runtime;

pub mod test_support;

pub use actions::{ActionContext, GetTokenScoresAction, GetWalletScoresAction, PluginAction};
pub use error::PluginError;
pub use generator::TextGenerator;
pub use runtime::{resolve_score_config, HostSettings, SharedCache, WALLET_CACHE_KEY};
