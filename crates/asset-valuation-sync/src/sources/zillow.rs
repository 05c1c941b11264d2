//! Zillow home value.

use super::PriceSource;
use crate::extract::XPathExtractor;
use asset_valuation::{ExtractError, Site};
use async_trait::async_trait;

pub const PRICE_XPATH: &str =
    r#"//*[@id="home-details-home-values"]/div/div[1]/div/div/div[1]/div/p/h3"#;

pub struct ZillowSource;

#[async_trait]
impl PriceSource for ZillowSource {
    fn site(&self) -> Site {
        Site::Zillow
    }

    async fn price_text(
        &self,
        extractor: &XPathExtractor<'_>,
        url: &str,
    ) -> Result<String, ExtractError> {
        extractor.text(url, PRICE_XPATH).await
    }
}
