//! Chrome DevTools Protocol capture backend

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Network;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;

use crate::{CaptureConfig, Error, RenderTarget, Result};

/// CSS selector for the wrapper element captured from each rendered page
pub const SQUIGGLE_SELECTOR: &str = ".squiggle-wrapper";

/// CDP-based capture backend (uses the `headless_chrome` crate)
///
/// Launches a headless Chrome instance, manages a single tab, and produces an
/// element screenshot of the loaded page. One instance handles one conversion.
pub struct Capturer {
    browser: Browser,
    tab: Arc<Tab>,
    config: CaptureConfig,
}

impl Capturer {
    /// Launch the browser and open a tab
    pub fn new(config: CaptureConfig) -> Result<Self> {
        // Chromium refuses to sandbox when run as root, which is the common
        // container case for this tool; launch unsandboxed as the original
        // deployment did.
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .build()
            .map_err(|e| {
                Error::InitializationError(format!("Failed to build launch options: {}", e))
            })?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        if config.disable_cache {
            tab.call_method(Network::Enable {
                max_total_buffer_size: None,
                max_resource_buffer_size: None,
                max_post_data_size: None,
                report_direct_socket_traffic: None,
                enable_durable_messages: None,
            })
            .map_err(|e| {
                Error::InitializationError(format!("Failed to enable network domain: {}", e))
            })?;
            tab.call_method(Network::SetCacheDisabled {
                cache_disabled: true,
            })
            .map_err(|e| {
                Error::InitializationError(format!("Failed to disable browser cache: {}", e))
            })?;
            debug!("browser cache disabled for this session");
        }

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Navigate to the target and screenshot the wrapper element as PNG bytes
    pub fn capture(&self, target: &RenderTarget) -> Result<Vec<u8>> {
        let nav_url = target.navigation_url();
        debug!("navigating to {}", target.as_str());

        self.tab
            .navigate_to(&nav_url)
            .map_err(|e| Error::LoadError(format!("Navigation failed: {}", e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| Error::LoadError(format!("Wait for navigation failed: {}", e)))?;

        // Let late layout and web fonts settle before measuring the element
        std::thread::sleep(Duration::from_millis(self.config.settle_ms));

        let element = self
            .tab
            .wait_for_element_with_custom_timeout(
                SQUIGGLE_SELECTOR,
                Duration::from_millis(self.config.element_timeout_ms),
            )
            .map_err(|e| {
                Error::CaptureError(format!("Element '{}' not found: {}", SQUIGGLE_SELECTOR, e))
            })?;

        let bytes = element
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png)
            .map_err(|e| Error::CaptureError(format!("Screenshot failed: {}", e)))?;

        debug!("captured {} bytes of PNG", bytes.len());
        Ok(bytes)
    }

    /// Close the tab and browser, terminating the Chrome subprocess
    pub fn close(self) -> Result<()> {
        drop(self.tab);
        drop(self.browser);
        Ok(())
    }
}
