//! Structural text extraction: open a page, wait for a node, read its text.

use crate::renderer::{RenderContext, Renderer};
use asset_valuation::{is_valid, ExtractError};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// How long to wait for a queried node unless told otherwise.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Knobs for every extraction in a run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Ceiling on page navigation. `None` waits indefinitely.
    pub navigation_timeout: Option<Duration>,
    /// How long to wait for the queried node before evaluating anyway.
    pub wait_timeout: Duration,
    /// Where failure screenshots go.
    pub screenshot_dir: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            navigation_timeout: None,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            screenshot_dir: std::env::temp_dir(),
        }
    }
}

/// Runs structural queries against a shared renderer.
pub struct XPathExtractor<'a> {
    renderer: &'a dyn Renderer,
    options: &'a ExtractOptions,
}

impl<'a> XPathExtractor<'a> {
    pub fn new(renderer: &'a dyn Renderer, options: &'a ExtractOptions) -> Self {
        Self { renderer, options }
    }

    /// Text of the first node `xpath` selects on `url`.
    ///
    /// Each call uses its own page, closed before returning. A wait timeout is
    /// logged and ignored; an evaluation failure leaves a screenshot behind.
    pub async fn text(&self, url: &str, xpath: &str) -> Result<String, ExtractError> {
        let mut ctx = self
            .renderer
            .new_context()
            .await
            .map_err(|e| ExtractError::Context(format!("{e:#}")))?;

        let result = self.text_in(ctx.as_mut(), url, xpath).await;

        if let Err(e) = ctx.close().await {
            debug!("closing page for {url} failed: {e:#}");
        }
        result
    }

    async fn text_in(
        &self,
        ctx: &mut dyn RenderContext,
        url: &str,
        xpath: &str,
    ) -> Result<String, ExtractError> {
        ctx.navigate(url, self.options.navigation_timeout)
            .await
            .map_err(|e| ExtractError::Navigation {
                url: url.to_string(),
                reason: format!("{e:#}"),
            })?;

        match ctx.wait_for_xpath(xpath, self.options.wait_timeout).await {
            Ok(true) => {}
            Ok(false) => warn!(
                "wait for xpath {xpath} on {url} timed out after {}s",
                self.options.wait_timeout.as_secs()
            ),
            Err(e) => warn!("wait for xpath {xpath} on {url} was not successful: {e:#}"),
        }

        let text = match ctx.xpath_text(xpath).await {
            Ok(text) => text,
            Err(e) => {
                warn!("error pulling xpath ({xpath}) from page ({url}): {e:#}");
                self.capture_failure(ctx).await;
                return Err(ExtractError::Evaluation {
                    url: url.to_string(),
                    xpath: xpath.to_string(),
                    reason: format!("{e:#}"),
                });
            }
        };

        match text {
            None => Err(ExtractError::NotFound {
                url: url.to_string(),
                xpath: xpath.to_string(),
            }),
            Some(t) if !is_valid(t.trim()) => Err(ExtractError::Empty {
                url: url.to_string(),
                xpath: xpath.to_string(),
            }),
            Some(t) => Ok(t.trim().to_string()),
        }
    }

    async fn capture_failure(&self, ctx: &dyn RenderContext) {
        let path = screenshot_path(&self.options.screenshot_dir);
        match ctx.screenshot(&path).await {
            Ok(()) => debug!("saved failure screenshot to {}", path.display()),
            Err(e) => warn!("could not save failure screenshot: {e:#}"),
        }
    }
}

/// `<dir>/xpath-error-<unix millis>.png`
pub fn screenshot_path(dir: &std::path::Path) -> PathBuf {
    dir.join(format!(
        "xpath-error-{}.png",
        chrono::Utc::now().timestamp_millis()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_path_shape() {
        let path = screenshot_path(std::path::Path::new("/tmp"));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("xpath-error-"));
        assert!(name.ends_with(".png"));
        assert!(name["xpath-error-".len()..name.len() - 4]
            .chars()
            .all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_default_options_have_no_navigation_ceiling() {
        let options = ExtractOptions::default();
        assert!(options.navigation_timeout.is_none());
        assert_eq!(options.wait_timeout, DEFAULT_WAIT_TIMEOUT);
    }
}
