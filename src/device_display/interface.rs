use std::error::Error;

/// The single text field the user reads status and results from.
pub trait DeviceDisplay: Send + Sync {
    /// Replace whatever is shown with `text`.
    fn show_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
