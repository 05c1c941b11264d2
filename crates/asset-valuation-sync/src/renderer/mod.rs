//! Renderer abstraction for browser-based page rendering.
//!
//! Defines the `Renderer` and `RenderContext` traits that abstract over
//! the browser engine (currently Chromium via chromiumoxide). One context is
//! one page; extractors open a fresh context per query and close it after.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// A browser engine that can create rendering contexts.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Create a new browser context (tab).
    async fn new_context(&self) -> Result<Box<dyn RenderContext>>;
    /// Shut down the browser engine.
    async fn shutdown(&self) -> Result<()>;
    /// Number of currently active contexts.
    fn active_contexts(&self) -> usize;
}

/// A single browser context (tab) for rendering pages.
#[async_trait]
pub trait RenderContext: Send + Sync {
    /// Navigate to a URL. `None` waits as long as the page takes.
    async fn navigate(&mut self, url: &str, timeout: Option<Duration>) -> Result<()>;
    /// Wait until `xpath` selects a node. Returns `false` if `timeout` elapsed first.
    async fn wait_for_xpath(&self, xpath: &str, timeout: Duration) -> Result<bool>;
    /// Text content of the first node selected by `xpath`, `None` if nothing matches.
    async fn xpath_text(&self, xpath: &str) -> Result<Option<String>>;
    /// Write a full-page PNG screenshot to `path`.
    async fn screenshot(&self, path: &Path) -> Result<()>;
    /// Close this context.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// JavaScript that resolves `xpath` against the live document and returns
/// the first node's `textContent`, or `null`.
pub(crate) fn xpath_text_script(xpath: &str) -> Result<String> {
    let literal = serde_json::to_string(xpath)?;
    Ok(format!(
        "(() => {{ const n = document.evaluate({literal}, document, null, \
         XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue; \
         return n ? n.textContent : null; }})()"
    ))
}

/// JavaScript that returns whether `xpath` currently selects a node.
pub(crate) fn xpath_exists_script(xpath: &str) -> Result<String> {
    let literal = serde_json::to_string(xpath)?;
    Ok(format!(
        "(() => document.evaluate({literal}, document, null, \
         XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue !== null)()"
    ))
}
