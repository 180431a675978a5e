use crate::device_browser::interface::DeviceBrowser;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct DeviceBrowserFake {
    logger: Arc<dyn Logger + Send + Sync>,
    opened: Arc<Mutex<Vec<String>>>,
}

impl DeviceBrowserFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("browser").with_namespace("fake"),
            opened: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl DeviceBrowser for DeviceBrowserFake {
    fn open_url(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("open_url({})", url))?;
        self.opened
            .lock()
            .map_err(|e| e.to_string())?
            .push(url.to_string());
        Ok(())
    }
}
