//! Known valuation providers and URL matching.

use std::fmt;
use url::Url;

/// A supported valuation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    KelleyBlueBook,
    Zillow,
    Redfin,
}

impl Site {
    /// Registrable domain the provider serves pages from.
    pub fn domain(self) -> &'static str {
        match self {
            Site::KelleyBlueBook => "kbb.com",
            Site::Zillow => "zillow.com",
            Site::Redfin => "redfin.com",
        }
    }

    /// True when `url` is an http(s) address on this provider's domain or a subdomain of it.
    pub fn matches(self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url.trim()) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        let Some(host) = parsed.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();
        let domain = self.domain();
        host == domain || host.ends_with(&format!(".{domain}"))
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Site::KelleyBlueBook => "kbb",
            Site::Zillow => "zillow",
            Site::Redfin => "redfin",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_matches() {
        assert!(Site::KelleyBlueBook.matches("https://x.kbb.com/toyota/camry/2018/"));
        assert!(Site::Zillow.matches("https://www.zillow.com/homedetails/123_zpid/"));
        assert!(Site::Redfin.matches("https://redfin.com/CA/home/1"));
    }

    #[test]
    fn test_lookalike_domain_does_not_match() {
        assert!(!Site::KelleyBlueBook.matches("https://notkbb.com/x"));
        assert!(!Site::Zillow.matches("https://zillow.com.evil.net/x"));
    }

    #[test]
    fn test_garbage_does_not_match() {
        assert!(!Site::Redfin.matches("redfin"));
        assert!(!Site::Redfin.matches(""));
        assert!(!Site::Zillow.matches("ftp://zillow.com/file"));
    }
}
