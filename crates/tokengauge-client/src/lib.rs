pub mod client;
pub mod error;
pub mod search;

pub use client::ScoreApiClient;
pub use error::ClientError;
pub use search::{search_many, TokenSearch};
