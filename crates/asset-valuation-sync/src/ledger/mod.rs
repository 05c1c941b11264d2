//! The remote ledger holding asset balances.

pub mod lunch_money;

use asset_valuation::AssetId;
use async_trait::async_trait;

pub use lunch_money::LunchMoneyClient;

/// Errors from a balance update.
#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ledger returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("ledger rejected the update: {0}")]
    Rejected(String),

    #[error("could not decode ledger response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can set an asset's balance.
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn update_asset_balance(&self, id: AssetId, balance: f64) -> Result<(), LedgerError>;
}

/// Balance as the ledger expects it: shortest decimal form, no exponent.
pub fn format_balance(balance: f64) -> String {
    format!("{balance}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(8450.0), "8450");
        assert_eq!(format_balance(12345.67), "12345.67");
        assert_eq!(format_balance(305000.0), "305000");
    }
}
