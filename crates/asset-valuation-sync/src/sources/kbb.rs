//! Kelley Blue Book: the price lives in a text element of an SVG that the
//! page embeds through an `<object>`, so it takes two lookups. The two stages
//! stay separate so a caller can tell which one came up empty.

use crate::extract::XPathExtractor;
use asset_valuation::ExtractError;
use url::Url;

/// Address of the embedded price advisor SVG. The `object` is not always
/// nested in `#priceAdvisorWrapper`, so match it anywhere.
pub const SVG_ADDRESS_XPATH: &str = "//object/@data";

/// Fourth text element of the range box inside the SVG.
pub const SVG_PRICE_XPATH: &str = "//*[@id='RangeBox']/*[name()='text'][4]";

pub struct KbbSource;

impl KbbSource {
    /// Stage one: the embedded SVG address.
    pub async fn svg_address(
        &self,
        extractor: &XPathExtractor<'_>,
        url: &str,
    ) -> Result<String, ExtractError> {
        let data = extractor.text(url, SVG_ADDRESS_XPATH).await?;
        Ok(resolve_address(url, &data))
    }

    /// Stage two: the price text inside the SVG at `svg`.
    pub async fn svg_price(
        &self,
        extractor: &XPathExtractor<'_>,
        svg: &str,
    ) -> Result<String, ExtractError> {
        extractor.text(svg, SVG_PRICE_XPATH).await
    }
}

/// `object/@data` may be relative to the page it sits on.
fn resolve_address(page: &str, data: &str) -> String {
    Url::parse(page)
        .and_then(|base| base.join(data))
        .map(String::from)
        .unwrap_or_else(|_| data.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_address_kept() {
        assert_eq!(
            resolve_address("https://www.kbb.com/car/", "https://pa.kbb.com/a.svg"),
            "https://pa.kbb.com/a.svg"
        );
    }

    #[test]
    fn test_relative_address_joined() {
        assert_eq!(
            resolve_address("https://www.kbb.com/toyota/camry/", "/svg/range.svg?p=1"),
            "https://www.kbb.com/svg/range.svg?p=1"
        );
    }
}
