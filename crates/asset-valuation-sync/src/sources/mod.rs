//! Per-site price sources.
//!
//! Each provider keeps its structural query paths in its own module so a
//! layout change on one site touches one file. Single-page home providers
//! share [`PriceSource`]; KBB needs two pages and has its own stages.

pub mod kbb;
pub mod redfin;
pub mod zillow;

use crate::extract::XPathExtractor;
use asset_valuation::{ExtractError, Site};
use async_trait::async_trait;

pub use kbb::KbbSource;
pub use redfin::RedfinSource;
pub use zillow::ZillowSource;

/// A provider whose price sits on the page it is given.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Which provider this is.
    fn site(&self) -> Site;
    /// Raw price text, e.g. `"$450,000"`.
    async fn price_text(
        &self,
        extractor: &XPathExtractor<'_>,
        url: &str,
    ) -> Result<String, ExtractError>;
}
