pub mod api;
pub mod config;
pub mod llm;
pub mod outcome;
pub mod portfolio;
pub mod score;

pub use api::{GaugeRecord, Gauges, ScoringFundamental, Scores};
pub use config::{PluginConfig, ScoreQueryConfig};
pub use llm::{Confidence, ExtractedSymbols};
pub use outcome::{ActionResponse, LookupOutcome, TokenScoresData, WalletScoresData};
pub use portfolio::{PortfolioItem, WalletPortfolio};
pub use score::{ScoreBand, TokenScore};
