use serde::{Deserialize, Serialize};

/// One held asset in the externally-owned wallet snapshot.
/// Amounts are decimal strings as written by the wallet collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub balance: String,
    #[serde(default)]
    pub ui_amount: String,
    #[serde(default)]
    pub price_usd: String,
    #[serde(default)]
    pub value_usd: String,
}

/// Wallet portfolio structure held in the host's shared cache.
/// Written entirely by another plugin; this crate only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletPortfolio {
    #[serde(default)]
    pub total_usd: String,
    #[serde(default)]
    pub total_sol: String,
    pub items: Vec<PortfolioItem>,
}
