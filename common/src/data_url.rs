//! Data-URL helpers shared by the CLI and the web frontend.

/// Extract the base64 payload from a data URL.
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." style string
///
/// # Returns
/// The base64-encoded payload, or None when the URL has no comma.
pub fn extract_base64(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the MIME type from a data URL.
///
/// Falls back to "image/jpeg" when the URL is malformed.
pub fn extract_mime_type(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Assemble a data URL from a MIME type and base64 payload.
pub fn build(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}

/// Whether the data URL carries a raster image.
pub fn is_image(data_url: &str) -> bool {
    data_url.starts_with("data:image/")
}
