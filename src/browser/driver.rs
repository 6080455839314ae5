//! The page-driver seam
//!
//! [`PageDriver`] is the narrow interface the scenario runner drives a
//! browser through: navigate, fill, click, wait, read back URL/title, count
//! elements, screenshot. [`CdpDriver`] is the chromiumoxide-backed
//! implementation; tests script a fake against the same trait.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use tracing::{debug, info, instrument};

use crate::browser::{BrowserConfig, BrowserController, PageHandle};
use crate::error::{CaptureError, Error, NavigationError, Result};

/// Default bound on page-load waits, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Blocking browser operations issued one at a time by the runner
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a URL and wait for the document to load
    async fn goto(&self, url: &str) -> Result<()>;

    /// Fill the element matching `selector` with `text`
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Click the element matching `selector`
    async fn click(&self, selector: &str) -> Result<()>;

    /// Wait for the navigation triggered by a prior interaction, bounded
    /// by `timeout`
    async fn wait_for_navigation(&self, timeout: Duration) -> Result<()>;

    /// Current page URL
    async fn current_url(&self) -> Result<String>;

    /// Current document title (may be empty)
    async fn title(&self) -> Result<String>;

    /// Number of elements matching `selector`
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Full-page PNG screenshot of the current view
    async fn screenshot(&self) -> Result<Vec<u8>>;

    /// Release the browser session. Idempotent.
    async fn close(&mut self) -> Result<()>;
}

/// ChromiumOxide-backed [`PageDriver`]
pub struct CdpDriver {
    controller: Option<BrowserController>,
    page: PageHandle,
}

impl CdpDriver {
    /// Launch a browser and open the single page used for the run
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let controller = BrowserController::with_config(config).await?;
        let page = controller.new_page().await?;
        Ok(Self {
            controller: Some(controller),
            page,
        })
    }

    fn escape_selector(selector: &str) -> String {
        selector.replace('\\', "\\\\").replace('\'', "\\'")
    }
}

#[async_trait]
impl PageDriver for CdpDriver {
    #[instrument(skip(self))]
    async fn goto(&self, url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(NavigationError::InvalidUrl(format!(
                "URL must start with http:// or https://: {url}"
            ))
            .into());
        }

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(DEFAULT_TIMEOUT_MS);
        tokio::time::timeout(timeout, self.page.inner().goto(url))
            .await
            .map_err(|_| NavigationError::Timeout(DEFAULT_TIMEOUT_MS))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        // Wait for the load event before the scenario inspects the page
        let ready_script = r#"
            new Promise(resolve => {
                if (document.readyState === 'complete') {
                    resolve(true);
                } else {
                    window.addEventListener('load', () => resolve(true));
                }
            })
        "#;
        tokio::time::timeout(timeout, self.page.inner().evaluate(ready_script))
            .await
            .map_err(|_| NavigationError::Timeout(DEFAULT_TIMEOUT_MS))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        debug!("Navigation complete: {}", url);
        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.page.inner().find_element(selector).await.map_err(|e| {
            NavigationError::InteractionFailed {
                selector: selector.to_string(),
                message: e.to_string(),
            }
        })?;

        // Focus before typing, as a user would
        element
            .click()
            .await
            .map_err(|e| NavigationError::InteractionFailed {
                selector: selector.to_string(),
                message: e.to_string(),
            })?;

        element
            .type_str(text)
            .await
            .map_err(|e| NavigationError::InteractionFailed {
                selector: selector.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn click(&self, selector: &str) -> Result<()> {
        let element = self.page.inner().find_element(selector).await.map_err(|e| {
            NavigationError::InteractionFailed {
                selector: selector.to_string(),
                message: e.to_string(),
            }
        })?;

        element
            .click()
            .await
            .map_err(|e| NavigationError::InteractionFailed {
                selector: selector.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn wait_for_navigation(&self, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.page.inner().wait_for_navigation())
            .await
            .map_err(|_| NavigationError::Timeout(timeout.as_millis() as u64))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        let url = self
            .page
            .inner()
            .url()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;
        Ok(url.unwrap_or_default())
    }

    async fn title(&self) -> Result<String> {
        let title: String = self
            .page
            .inner()
            .evaluate("document.title")
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .into_value()
            .map_err(|e| Error::cdp(e.to_string()))?;
        Ok(title)
    }

    #[instrument(skip(self))]
    async fn count(&self, selector: &str) -> Result<usize> {
        let script = format!(
            "document.querySelectorAll('{}').length",
            Self::escape_selector(selector)
        );
        let count: u64 = self
            .page
            .inner()
            .evaluate(script.as_str())
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .into_value()
            .map_err(|e| Error::cdp(e.to_string()))?;
        Ok(count as usize)
    }

    #[instrument(skip(self))]
    async fn screenshot(&self) -> Result<Vec<u8>> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .from_surface(true)
            .capture_beyond_viewport(true)
            .build();

        let data = self
            .page
            .inner()
            .screenshot(params)
            .await
            .map_err(|e| CaptureError::ScreenshotFailed(e.to_string()))?;

        debug!(size = data.len(), "Screenshot captured");
        Ok(data)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(controller) = self.controller.take() {
            controller.close().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_selector() {
        assert_eq!(
            CdpDriver::escape_selector(r#"iframe[title*="Stripe"]"#),
            r#"iframe[title*="Stripe"]"#
        );
        assert_eq!(CdpDriver::escape_selector("a[name='x']"), "a[name=\\'x\\']");
    }
}
