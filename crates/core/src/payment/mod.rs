//! Payment collaborators: PIX key presentation and QR image references.

mod qr;

pub use qr::QrServerRenderer;

/// Trait for turning a payment payload into an image reference.
///
/// The raffle never verifies payments; it only hands the buyer
/// something scannable. Implementations must not perform I/O.
pub trait QrRenderer: Send + Sync {
    /// URL of a QR image encoding `payload`.
    fn image_url(&self, payload: &str) -> String;
}
