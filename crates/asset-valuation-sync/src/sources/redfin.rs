//! Redfin estimate.

use super::PriceSource;
use crate::extract::XPathExtractor;
use asset_valuation::{ExtractError, Site};
use async_trait::async_trait;

// If this breaks, open the listing, inspect the estimate and copy the new path.
pub const PRICE_XPATH: &str = r#"//*[@data-rf-test-id="abp-price"]/div[@class="statsValue"]"#;

pub struct RedfinSource;

#[async_trait]
impl PriceSource for RedfinSource {
    fn site(&self) -> Site {
        Site::Redfin
    }

    async fn price_text(
        &self,
        extractor: &XPathExtractor<'_>,
        url: &str,
    ) -> Result<String, ExtractError> {
        extractor.text(url, PRICE_XPATH).await
    }
}
