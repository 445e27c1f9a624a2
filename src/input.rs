//! Input resolution and content-addressed output naming

use std::path::Path;

use sha1::{Digest, Sha1};
use url::Url;

use crate::{Error, Result};

/// A resolved conversion input.
///
/// The wrapped string is the canonical identity of the input: the raw literal
/// for inline markup and `chrome://` URIs, or the constructed `file://` URI
/// for local paths. Default output names are derived from it and the
/// completion log line reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// Raw HTML markup, rendered through an inline `data:text/html,` payload
    InlineHtml(String),
    /// A URI navigated to directly (`chrome://` internals or a `file://` path)
    Uri(String),
}

impl RenderTarget {
    /// The resolved input string
    pub fn as_str(&self) -> &str {
        match self {
            RenderTarget::InlineHtml(s) | RenderTarget::Uri(s) => s,
        }
    }

    /// The URL handed to the browser for navigation.
    ///
    /// Inline markup is embedded unencoded; browsers accept plain markup in
    /// `data:text/html,` payloads.
    pub fn navigation_url(&self) -> String {
        match self {
            RenderTarget::InlineHtml(html) => format!("data:text/html,{html}"),
            RenderTarget::Uri(uri) => uri.clone(),
        }
    }
}

/// Resolve a raw CLI argument into a [`RenderTarget`].
///
/// Strings starting with `<div` (case-insensitive) are inline markup and
/// strings starting with `chrome://` are internal URIs; both pass through
/// untouched. Anything else is resolved lexically against the current working
/// directory and wrapped as a `file://` URI. No filesystem probing happens
/// here; a dangling path surfaces later as a navigation error.
pub fn resolve(raw: &str) -> Result<RenderTarget> {
    let lower = raw.to_lowercase();
    if lower.starts_with("<div") {
        return Ok(RenderTarget::InlineHtml(raw.to_string()));
    }
    if lower.starts_with("chrome://") {
        return Ok(RenderTarget::Uri(raw.to_string()));
    }

    let absolute = std::path::absolute(Path::new(raw))
        .map_err(|e| Error::InvalidInput(format!("cannot resolve path '{raw}': {e}")))?;
    let url = Url::from_file_path(&absolute).map_err(|()| {
        Error::InvalidInput(format!(
            "cannot express '{}' as a file URI",
            absolute.display()
        ))
    })?;
    Ok(RenderTarget::Uri(url.to_string()))
}

/// Default output filename: the lowercase hex SHA-1 digest of the resolved
/// input string, suffixed `.png`.
pub fn default_output_name(resolved: &str) -> String {
    let digest = Sha1::digest(resolved.as_bytes());
    format!("{}.png", hex::encode(digest))
}
