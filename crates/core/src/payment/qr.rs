//! QR image rendering via an external image service.

use super::QrRenderer;

/// Default image edge in pixels.
const DEFAULT_SIZE_PX: u32 = 200;

/// Renderer backed by the public qrserver.com image API.
///
/// Only builds the image URL; fetching and displaying it is the
/// caller's concern.
pub struct QrServerRenderer {
    base_url: String,
    size_px: u32,
}

impl QrServerRenderer {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            size_px: DEFAULT_SIZE_PX,
        }
    }

    /// Override the service base URL (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_size(mut self, size_px: u32) -> Self {
        self.size_px = size_px;
        self
    }
}

impl Default for QrServerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl QrRenderer for QrServerRenderer {
    fn image_url(&self, payload: &str) -> String {
        format!(
            "{}?size={size}x{size}&data={data}",
            self.base_url,
            size = self.size_px,
            data = urlencoding::encode(payload)
        )
    }
}
