//! Asset valuation sync — scrape valuations with headless Chromium and push them to a ledger.

pub mod extract;
pub mod ledger;
pub mod pipeline;
pub mod renderer;
pub mod settings;
pub mod sources;

pub use extract::{ExtractOptions, XPathExtractor, DEFAULT_WAIT_TIMEOUT};
pub use ledger::{Ledger, LedgerError, LunchMoneyClient};
pub use pipeline::{AssetOutcome, Pipeline, RunSummary};
pub use renderer::{RenderContext, Renderer};
