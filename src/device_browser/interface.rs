pub trait DeviceBrowser {
    fn open_url(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
