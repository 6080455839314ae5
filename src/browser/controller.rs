//! Browser lifecycle management
//!
//! This module handles browser launch, shutdown, and page management.
//! Exactly one browser process and one page are opened per run; the runner
//! guarantees release on every exit path.

use crate::error::{BrowserError, Error, Result};
use chromiumoxide::browser::{Browser, BrowserConfig as CdpBrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width (default: 1920)
    pub width: u32,
    /// Browser window height (default: 1080)
    pub height: u32,
    /// Enable sandbox (default: true)
    pub sandbox: bool,
    /// Path to Chrome/Chromium executable (None = auto-detect)
    pub chrome_path: Option<String>,
    /// Additional Chrome arguments
    pub extra_args: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            width: 1920,
            height: 1080,
            sandbox: true,
            chrome_path: None,
            extra_args: Vec::new(),
        }
    }
}

impl BrowserConfig {
    /// Create a new config builder
    pub fn builder() -> BrowserConfigBuilder {
        BrowserConfigBuilder::default()
    }
}

/// Builder for BrowserConfig
#[derive(Default)]
pub struct BrowserConfigBuilder {
    config: BrowserConfig,
}

impl BrowserConfigBuilder {
    /// Set headless mode
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Set viewport dimensions
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Enable/disable sandbox
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.config.sandbox = sandbox;
        self
    }

    /// Set Chrome path
    pub fn chrome_path<S: Into<String>>(mut self, path: S) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    /// Add extra Chrome argument
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.config.extra_args.push(arg.into());
        self
    }

    /// Build the config
    pub fn build(self) -> BrowserConfig {
        self.config
    }
}

/// Handle to an open browser page
#[derive(Clone)]
pub struct PageHandle {
    pub(crate) page: Page,
}

impl PageHandle {
    /// Get the underlying chromiumoxide Page
    pub fn inner(&self) -> &Page {
        &self.page
    }
}

/// High-level browser controller
pub struct BrowserController {
    browser: Browser,
    handler: JoinHandle<()>,
    config: BrowserConfig,
}

impl BrowserController {
    /// Launch a browser with default config
    #[instrument]
    pub async fn new() -> Result<Self> {
        Self::with_config(BrowserConfig::default()).await
    }

    /// Launch a browser with custom config
    #[instrument(skip(config))]
    pub async fn with_config(config: BrowserConfig) -> Result<Self> {
        info!(headless = config.headless, "Launching browser");

        let mut builder = CdpBrowserConfig::builder();

        builder = builder.viewport(chromiumoxide::handler::viewport::Viewport {
            width: config.width,
            height: config.height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: true,
            has_touch: false,
        });

        if !config.headless {
            builder = builder.with_head();
        }

        if !config.sandbox {
            builder = builder.arg("--no-sandbox");
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        for arg in &config.extra_args {
            builder = builder.arg(arg);
        }

        let cdp_config = builder
            .build()
            .map_err(|e| BrowserError::ConfigError(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(cdp_config)
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        // Drive CDP events until the browser goes away
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    warn!("Browser handler event error");
                    break;
                }
            }
            debug!("Browser handler finished");
        });

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            handler: handler_task,
            config,
        })
    }

    /// Open the page used for the run
    #[instrument(skip(self))]
    pub async fn new_page(&self) -> Result<PageHandle> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::PageCreationFailed(e.to_string()))?;

        debug!("Created new page");
        Ok(PageHandle { page })
    }

    /// Get the browser configuration
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Close the browser and wait for the handler task to drain
    #[instrument(skip(self))]
    pub async fn close(mut self) -> Result<()> {
        info!("Closing browser");

        self.browser
            .close()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;

        let _ = tokio::time::timeout(Duration::from_secs(5), self.handler).await;

        info!("Browser closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_config_default() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.width, 1920);
        assert_eq!(config.height, 1080);
        assert!(config.sandbox);
        assert!(config.chrome_path.is_none());
        assert!(config.extra_args.is_empty());
    }

    #[test]
    fn test_browser_config_builder() {
        let config = BrowserConfig::builder()
            .headless(false)
            .viewport(1280, 720)
            .sandbox(false)
            .chrome_path("/usr/bin/chromium")
            .arg("--disable-gpu")
            .build();

        assert!(!config.headless);
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert!(!config.sandbox);
        assert_eq!(config.chrome_path, Some("/usr/bin/chromium".to_string()));
        assert_eq!(config.extra_args, vec!["--disable-gpu"]);
    }
}
