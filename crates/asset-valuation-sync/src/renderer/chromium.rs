//! Chromium-based renderer using chromiumoxide.

use super::{xpath_exists_script, xpath_text_script, RenderContext, Renderer};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Poll interval while waiting for a node to appear.
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// CDP request timeout. Navigation has no ceiling of its own, so this only
/// needs to outlast very slow pages.
const CDP_REQUEST_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. ASSET_SYNC_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("ASSET_SYNC_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. ~/.asset-valuation/chromium/
    if let Some(home) = dirs::home_dir() {
        let base = home.join(".asset-valuation/chromium");
        let candidates = if cfg!(target_os = "macos") {
            vec![
                base.join("chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                base.join("chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing"),
                base.join("chrome"),
            ]
        } else {
            vec![base.join("chrome-linux64/chrome"), base.join("chrome")]
        };
        if let Some(found) = candidates.into_iter().find(|c| c.exists()) {
            return Some(found);
        }
    }

    // 3. System PATH
    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 4. Common macOS location
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// Chromium-based renderer. Owns the one browser process for a run.
pub struct ChromiumRenderer {
    browser: Mutex<Browser>,
    handler: JoinHandle<()>,
    active_count: Arc<AtomicUsize>,
}

impl ChromiumRenderer {
    /// Launch a headless Chromium instance.
    pub async fn new(executable: Option<PathBuf>) -> Result<Self> {
        let chrome_path = executable.or_else(find_chromium).context(
            "Chromium not found. Install Chrome or set ASSET_SYNC_CHROMIUM_PATH.",
        )?;
        tracing::debug!("launching {}", chrome_path.display());

        let config = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .request_timeout(CDP_REQUEST_TIMEOUT)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-blink-features=AutomationControlled")
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("browser handler event error: {e}");
                }
            }
        });

        Ok(Self {
            browser: Mutex::new(browser),
            handler,
            active_count: Arc::new(AtomicUsize::new(0)),
        })
    }
}

#[async_trait]
impl Renderer for ChromiumRenderer {
    async fn new_context(&self) -> Result<Box<dyn RenderContext>> {
        let page = self
            .browser
            .lock()
            .await
            .new_page("about:blank")
            .await
            .context("failed to create new page")?;

        self.active_count.fetch_add(1, Ordering::Relaxed);

        Ok(Box::new(ChromiumContext {
            page,
            active_count: Arc::clone(&self.active_count),
        }))
    }

    async fn shutdown(&self) -> Result<()> {
        let mut browser = self.browser.lock().await;
        browser.close().await.context("failed to close Chromium")?;
        let _ = browser.wait().await;
        self.handler.abort();
        Ok(())
    }

    fn active_contexts(&self) -> usize {
        self.active_count.load(Ordering::Relaxed)
    }
}

/// A single Chromium page context.
pub struct ChromiumContext {
    page: Page,
    active_count: Arc<AtomicUsize>,
}

impl ChromiumContext {
    async fn eval(&self, script: String) -> Result<Option<serde_json::Value>> {
        let result = self
            .page
            .evaluate(script)
            .await
            .context("JS execution failed")?;
        Ok(result.value().cloned())
    }
}

#[async_trait]
impl RenderContext for ChromiumContext {
    async fn navigate(&mut self, url: &str, timeout: Option<Duration>) -> Result<()> {
        let goto = async {
            self.page.goto(url).await?;
            self.page.wait_for_navigation().await?;
            Ok::<_, chromiumoxide::error::CdpError>(())
        };

        match timeout {
            None => goto.await.context("navigation failed"),
            Some(limit) => match tokio::time::timeout(limit, goto).await {
                Ok(result) => result.context("navigation failed"),
                Err(_) => bail!("navigation timed out after {}ms", limit.as_millis()),
            },
        }
    }

    async fn wait_for_xpath(&self, xpath: &str, timeout: Duration) -> Result<bool> {
        let script = xpath_exists_script(xpath)?;
        let poll = async {
            loop {
                let found = self.eval(script.clone()).await?;
                if found.and_then(|v| v.as_bool()).unwrap_or(false) {
                    return Ok::<_, anyhow::Error>(());
                }
                tokio::time::sleep(WAIT_POLL_INTERVAL).await;
            }
        };

        match tokio::time::timeout(timeout, poll).await {
            Ok(result) => result.map(|()| true),
            Err(_) => Ok(false),
        }
    }

    async fn xpath_text(&self, xpath: &str) -> Result<Option<String>> {
        let value = self.eval(xpath_text_script(xpath)?).await?;
        match value {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => Ok(Some(s)),
            Some(other) => bail!("unexpected XPath result: {other}"),
        }
    }

    async fn screenshot(&self, path: &Path) -> Result<()> {
        self.page
            .save_screenshot(ScreenshotParams::builder().full_page(true).build(), path)
            .await
            .with_context(|| format!("failed to save screenshot to {}", path.display()))?;
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.active_count.fetch_sub(1, Ordering::Relaxed);
        let _ = self.page.close().await;
        Ok(())
    }
}
