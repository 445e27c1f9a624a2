//! Integration tests for the conversion pipeline

use minerva::{convert, input, CaptureConfig, Error};

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn render_inline_markup() {
    let target = input::resolve(
        "<div class=\"squiggle-wrapper\" style=\"width:80px;height:40px;background:#333\">hi</div>",
    )
    .expect("failed to resolve input");

    let bytes = convert::render_png(target, CaptureConfig::default())
        .await
        .expect("conversion failed");

    // Check that we got PNG data
    assert!(bytes.len() > 100, "PNG data seems too small");
    // PNG files start with these magic bytes
    assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn render_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("snippet.html");
    std::fs::write(
        &page,
        r#"<!DOCTYPE html>
<html>
<head><title>Snippet</title></head>
<body>
<div class="squiggle-wrapper" style="width:200px;height:100px;background:#eee">
  <p>rendered from disk</p>
</div>
</body>
</html>"#,
    )
    .unwrap();

    let target = input::resolve(page.to_str().unwrap()).unwrap();
    assert!(target.as_str().starts_with("file:///"));

    let bytes = convert::render_png(target, CaptureConfig::default())
        .await
        .expect("conversion failed");
    assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn missing_wrapper_element_fails() {
    let target = input::resolve("<div>no wrapper here</div>").unwrap();
    let config = CaptureConfig {
        element_timeout_ms: 2000,
        ..CaptureConfig::default()
    };

    let result = convert::render_png(target, config).await;
    assert!(matches!(result, Err(Error::CaptureError(_))), "got {result:?}");
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn cache_can_be_disabled() {
    let target = input::resolve(
        "<div class=\"squiggle-wrapper\" style=\"width:10px;height:10px\"></div>",
    )
    .unwrap();
    let config = CaptureConfig {
        disable_cache: true,
        ..CaptureConfig::default()
    };

    let bytes = convert::render_png(target, config)
        .await
        .expect("conversion with cache disabled failed");
    assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
}
