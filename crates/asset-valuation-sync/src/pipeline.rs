//! The sync run: one asset at a time, extract, reconcile, update.

use crate::extract::{ExtractOptions, XPathExtractor};
use crate::ledger::Ledger;
use crate::renderer::Renderer;
use crate::sources::{KbbSource, PriceSource, RedfinSource, ZillowSource};
use asset_valuation::{
    classify, is_valid, parse_currency, reconcile, AssetEntry, AssetId, AssetPlan, ConfigEntry,
    ExtractedValue, Unsupported,
};
use tracing::{debug, error, info, warn};

/// What happened to one asset.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetOutcome {
    /// The ledger accepted `balance`.
    Updated { balance: f64 },
    /// Dry run: `balance` would have been sent.
    WouldUpdate { balance: f64 },
    /// No usable value; nothing sent.
    Skipped { reason: String },
    /// The entry does not describe a supported asset.
    Unsupported { reason: String },
    /// A balance was computed but the ledger refused or failed.
    LedgerFailed { balance: f64, reason: String },
}

/// Counts for the final summary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub would_update: usize,
    pub skipped: usize,
    pub unsupported: usize,
    pub ledger_failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &AssetOutcome) {
        match outcome {
            AssetOutcome::Updated { .. } => self.updated += 1,
            AssetOutcome::WouldUpdate { .. } => self.would_update += 1,
            AssetOutcome::Skipped { .. } => self.skipped += 1,
            AssetOutcome::Unsupported { .. } => self.unsupported += 1,
            AssetOutcome::LedgerFailed { .. } => self.ledger_failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.would_update + self.skipped + self.unsupported + self.ledger_failed
    }
}

/// Drives a run against an injected renderer and ledger.
pub struct Pipeline<'a> {
    renderer: &'a dyn Renderer,
    ledger: &'a dyn Ledger,
    options: ExtractOptions,
    dry_run: bool,
    kbb: KbbSource,
    zillow: ZillowSource,
    redfin: RedfinSource,
}

impl<'a> Pipeline<'a> {
    pub fn new(renderer: &'a dyn Renderer, ledger: &'a dyn Ledger, options: ExtractOptions) -> Self {
        Self {
            renderer,
            ledger,
            options,
            dry_run: false,
            kbb: KbbSource,
            zillow: ZillowSource,
            redfin: RedfinSource,
        }
    }

    /// Compute balances without calling the ledger.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every entry in order. Never fails; problems are logged per asset.
    pub async fn run(&self, entries: &[ConfigEntry]) -> RunSummary {
        let mut summary = RunSummary::default();

        for entry in entries {
            let outcome = match entry {
                ConfigEntry::Asset(asset) => self.process(asset).await,
                ConfigEntry::Rejected { key, reason } => {
                    error!("unsupported asset type for {key}: {reason}");
                    AssetOutcome::Unsupported {
                        reason: reason.clone(),
                    }
                }
            };
            summary.record(&outcome);
        }

        summary
    }

    /// Process one asset entry.
    pub async fn process(&self, asset: &AssetEntry) -> AssetOutcome {
        let plan = match classify(&asset.source) {
            Ok(plan) => plan,
            Err(e) => return self.unsupported(asset.id, e),
        };

        let balance = match &plan {
            AssetPlan::Vehicle { url } => self.vehicle_value(url).await,
            AssetPlan::Home { zillow, redfin } => {
                self.home_value(zillow.as_deref(), redfin.as_deref()).await
            }
        };

        match balance {
            Ok(balance) => self.update(asset.id, balance).await,
            Err(reason) => {
                warn!("skipping asset {}: {reason}", asset.id);
                AssetOutcome::Skipped { reason }
            }
        }
    }

    fn unsupported(&self, id: AssetId, reason: Unsupported) -> AssetOutcome {
        error!("unsupported asset type for {id}: {reason}");
        AssetOutcome::Unsupported {
            reason: reason.to_string(),
        }
    }

    async fn vehicle_value(&self, url: &str) -> Result<f64, String> {
        let extractor = XPathExtractor::new(self.renderer, &self.options);

        let svg = self.kbb.svg_address(&extractor, url).await.map_err(|e| {
            warn!(kind = e.kind(), "{e}");
            format!("could not find svg path for {url}")
        })?;

        let text = self.kbb.svg_price(&extractor, &svg).await.map_err(|e| {
            warn!(kind = e.kind(), "{e}");
            format!("could not find kbb price on svg {svg}")
        })?;

        let price = parse_currency(&text);
        if !is_valid(&price) {
            return Err(format!("kbb price {text:?} on svg {svg} is not a number"));
        }
        Ok(price)
    }

    async fn home_value(&self, zillow: Option<&str>, redfin: Option<&str>) -> Result<f64, String> {
        let extractor = XPathExtractor::new(self.renderer, &self.options);

        let mut readings: Vec<ExtractedValue> = Vec::with_capacity(2);
        for (source, url) in [
            (&self.zillow as &dyn PriceSource, zillow),
            (&self.redfin as &dyn PriceSource, redfin),
        ] {
            if let Some(url) = url {
                readings.push(self.reading(source, &extractor, url).await);
            }
        }

        debug!("home readings: {readings:?}");
        let value = reconcile(&readings).ok_or_else(|| "no valid home values".to_string())?;
        info!("reconciled {} reading(s) to {value}", readings.len());
        Ok(value)
    }

    async fn reading(
        &self,
        source: &dyn PriceSource,
        extractor: &XPathExtractor<'_>,
        url: &str,
    ) -> ExtractedValue {
        match source.price_text(extractor, url).await {
            Ok(text) => Some(parse_currency(&text)),
            Err(e) => {
                warn!(kind = e.kind(), "could not find {} home value for {url}: {e}", source.site());
                None
            }
        }
    }

    async fn update(&self, id: AssetId, balance: f64) -> AssetOutcome {
        if self.dry_run {
            info!("dry run: would update {id} to price: {balance}");
            return AssetOutcome::WouldUpdate { balance };
        }

        info!("updating {id} to price: {balance}");
        match self.ledger.update_asset_balance(id, balance).await {
            Ok(()) => AssetOutcome::Updated { balance },
            Err(e) => {
                error!("error updating asset {id}: {e}");
                AssetOutcome::LedgerFailed {
                    balance,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_every_outcome() {
        let mut summary = RunSummary::default();
        for outcome in [
            AssetOutcome::Updated { balance: 1.0 },
            AssetOutcome::Skipped {
                reason: "x".into(),
            },
            AssetOutcome::Unsupported {
                reason: "y".into(),
            },
            AssetOutcome::LedgerFailed {
                balance: 2.0,
                reason: "z".into(),
            },
        ] {
            summary.record(&outcome);
        }
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.would_update, 0);
    }
}
