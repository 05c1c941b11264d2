//! Decide which extractors an asset needs.

use crate::site::Site;
use crate::types::{AssetPlan, AssetSource};
use crate::validity::is_valid;
use thiserror::Error;

/// Why an entry cannot be scraped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unsupported {
    #[error("no url or redfin source configured")]
    NoSources,
    #[error("no source matches kbb.com, zillow.com or redfin.com")]
    UnknownSite,
}

/// Classify a source record.
///
/// A KBB `url` makes the asset a vehicle and wins over everything else. A
/// Zillow `url` and/or a Redfin `redfin` make it a home; a `url` on any other
/// site is ignored in that case.
pub fn classify(source: &AssetSource) -> Result<AssetPlan, Unsupported> {
    let url = source.url.as_deref().filter(|u| is_valid(*u));
    let redfin = source.redfin.as_deref().filter(|u| is_valid(*u));

    if url.is_none() && redfin.is_none() {
        return Err(Unsupported::NoSources);
    }

    if let Some(u) = url.filter(|u| Site::KelleyBlueBook.matches(u)) {
        return Ok(AssetPlan::Vehicle { url: u.to_string() });
    }

    let zillow = url.filter(|u| Site::Zillow.matches(u));
    let redfin = redfin.filter(|u| Site::Redfin.matches(u));

    if zillow.is_none() && redfin.is_none() {
        return Err(Unsupported::UnknownSite);
    }

    if let Some(u) = url.filter(|_| zillow.is_none()) {
        tracing::warn!("ignoring url {u}: not a kbb.com or zillow.com page");
    }

    Ok(AssetPlan::Home {
        zillow: zillow.map(String::from),
        redfin: redfin.map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(url: Option<&str>, redfin: Option<&str>) -> AssetSource {
        AssetSource {
            url: url.map(String::from),
            redfin: redfin.map(String::from),
        }
    }

    #[test]
    fn test_kbb_url_is_vehicle() {
        let plan = classify(&source(Some("https://x.kbb.com/car"), None)).unwrap();
        assert_eq!(
            plan,
            AssetPlan::Vehicle {
                url: "https://x.kbb.com/car".into()
            }
        );
    }

    #[test]
    fn test_zillow_and_redfin_is_home_with_both() {
        let plan = classify(&source(
            Some("https://zillow.com/h/1"),
            Some("https://redfin.com/h/1"),
        ))
        .unwrap();
        assert_eq!(plan.source_count(), 2);
    }

    #[test]
    fn test_redfin_only_is_home() {
        let plan = classify(&source(None, Some("https://www.redfin.com/h/2"))).unwrap();
        assert_eq!(
            plan,
            AssetPlan::Home {
                zillow: None,
                redfin: Some("https://www.redfin.com/h/2".into()),
            }
        );
    }

    #[test]
    fn test_foreign_url_dropped_when_redfin_present() {
        let plan = classify(&source(
            Some("https://example.com/x"),
            Some("https://redfin.com/h/3"),
        ))
        .unwrap();
        assert_eq!(plan.source_count(), 1);
    }

    #[test]
    fn test_empty_entry_is_unsupported() {
        assert_eq!(classify(&source(None, None)), Err(Unsupported::NoSources));
        assert_eq!(
            classify(&source(Some(""), Some(""))),
            Err(Unsupported::NoSources)
        );
    }

    #[test]
    fn test_unknown_site_is_unsupported() {
        assert_eq!(
            classify(&source(Some("https://cars.example.com/1"), None)),
            Err(Unsupported::UnknownSite)
        );
    }
}
