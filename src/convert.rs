//! Async facade over the blocking capture backend
//!
//! The CDP backend is synchronous; the conversion runs on a blocking worker
//! task so callers can await it and race it against a deadline.

use crate::capture::Capturer;
use crate::{CaptureConfig, Error, RenderTarget, Result};

/// Run the full conversion pipeline: launch the browser, navigate to the
/// target, screenshot the wrapper element, and return the PNG bytes.
///
/// The pipeline is a single linear chain; any stage failure is terminal.
pub async fn render_png(target: RenderTarget, config: CaptureConfig) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || -> Result<Vec<u8>> {
        let capturer = Capturer::new(config)?;
        let bytes = capturer.capture(&target)?;
        capturer.close()?;
        Ok(bytes)
    })
    .await
    .map_err(|e| Error::Other(format!("Capture worker failed: {}", e)))?
}
