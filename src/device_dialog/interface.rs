pub trait DeviceDialog {
    /// Asks a yes/no question and blocks until answered. `Ok(true)` means yes.
    fn confirm(&self, title: &str, message: &str)
        -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
