//! Minerva
//!
//! Convert HTML to PNG via inline markup or a local / internal URI.
//!
//! Minerva drives a headless Chrome instance: it navigates to the resolved
//! input, waits for a single wrapper element, screenshots it, and delivers
//! the PNG bytes to a file or standard output.
//!
//! # Example
//!
//! ```no_run
//! use minerva::{input, CaptureConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let target = input::resolve("<div class=\"squiggle-wrapper\">hi</div>")?;
//! let bytes = minerva::convert::render_png(target, CaptureConfig::default()).await?;
//! assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod capture;
pub mod convert;
pub mod input;
pub mod output;

pub use input::RenderTarget;
pub use output::OutputSink;

/// Configuration for the capture backend
///
/// The defaults cover the common case: a desktop-sized viewport, the browser
/// cache left on, and generous waits for layout and element lookup. Nothing
/// here is exposed on the CLI except the cache switch.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Viewport dimensions for the browser window
    pub viewport: Viewport,
    /// Disable the browser HTTP cache for the session
    pub disable_cache: bool,
    /// Delay after navigation before measuring the element, in milliseconds
    pub settle_ms: u64,
    /// How long to poll for the wrapper element, in milliseconds
    pub element_timeout_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            disable_cache: false,
            settle_ms: 500,
            element_timeout_ms: 15000,
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
