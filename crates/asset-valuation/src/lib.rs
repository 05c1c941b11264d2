//! Asset valuation core — config parsing, currency normalization, validity, and reconciliation.

pub mod config;
pub mod currency;
pub mod error;
pub mod plan;
pub mod reconcile;
pub mod site;
pub mod types;
pub mod validity;

pub use config::{load_config, parse_config, ConfigEntry};
pub use currency::parse_currency;
pub use error::{ConfigError, ExtractError};
pub use plan::{classify, Unsupported};
pub use reconcile::reconcile;
pub use site::Site;
pub use types::*;
pub use validity::{is_valid, Validity};
