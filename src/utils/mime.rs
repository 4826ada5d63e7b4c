//! MIME type utilities for thumbnail images

use image::ImageFormat;

/// Get MIME type from file extension
pub fn mime_from_ext(extension: &str) -> &'static str {
    let ext = extension.trim_start_matches('.').to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",

        // Default fallback
        _ => "application/octet-stream",
    }
}

/// Get MIME type for a decoded image format
pub fn mime_from_format(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Png => "image/png",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Gif => "image/gif",
        ImageFormat::Bmp => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Check if MIME type is an image format
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}
