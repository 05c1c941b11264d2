//! Core data types for asset sources and extracted readings.

use serde::{Deserialize, Serialize};

/// Ledger asset identifier.
pub type AssetId = i64;

/// One scraped reading. `None` means the source produced nothing, which is
/// distinct from a reading of zero. A `Some(NaN)` can appear after currency
/// normalization and is rejected by [`crate::is_valid`].
pub type ExtractedValue = Option<f64>;

/// The sources configured for one asset. Other keys in an entry are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSource {
    /// Primary valuation page (KBB or Zillow).
    #[serde(default)]
    pub url: Option<String>,
    /// Secondary home valuation page on Redfin.
    #[serde(default)]
    pub redfin: Option<String>,
}

/// A config entry whose id parsed and whose shape is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub id: AssetId,
    pub source: AssetSource,
}

/// What to scrape for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetPlan {
    /// A vehicle priced on KBB through the embedded SVG range box.
    Vehicle { url: String },
    /// A home priced by up to two providers, averaged.
    Home {
        zillow: Option<String>,
        redfin: Option<String>,
    },
}

impl AssetPlan {
    /// Number of pages this plan will query.
    pub fn source_count(&self) -> usize {
        match self {
            AssetPlan::Vehicle { .. } => 1,
            AssetPlan::Home { zillow, redfin } => {
                usize::from(zillow.is_some()) + usize::from(redfin.is_some())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_source_missing_fields_default_to_none() {
        let source: AssetSource = serde_json::from_str("{}").unwrap();
        assert_eq!(source, AssetSource::default());
    }

    #[test]
    fn test_asset_source_ignores_extra_keys() {
        let source: AssetSource =
            serde_json::from_str(r#"{"url": "https://www.kbb.com/car", "name": "Camry"}"#).unwrap();
        assert_eq!(source.url.as_deref(), Some("https://www.kbb.com/car"));
        assert_eq!(source.redfin, None);
    }

    #[test]
    fn test_asset_source_rejects_non_string_url() {
        let result: Result<AssetSource, _> = serde_json::from_str(r#"{"url": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_home_source_count() {
        let plan = AssetPlan::Home {
            zillow: Some("https://www.zillow.com/homedetails/1".into()),
            redfin: None,
        };
        assert_eq!(plan.source_count(), 1);
    }
}
