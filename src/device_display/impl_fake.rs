use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Keeps every text it was asked to show.
#[derive(Clone)]
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    history: Arc<Mutex<Vec<String>>>,
    failures_left: Arc<Mutex<usize>>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            history: Arc::new(Mutex::new(Vec::new())),
            failures_left: Arc::new(Mutex::new(0)),
        }
    }

    /// Fails the first `failures` calls to `show_text`, then behaves normally.
    pub fn failing_first(logger: Arc<dyn Logger + Send + Sync>, failures: usize) -> Self {
        let display = Self::new(logger);
        if let Ok(mut failures_left) = display.failures_left.lock() {
            *failures_left = failures;
        }
        display
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn current_text(&self) -> Option<String> {
        self.history().last().cloned()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!("show_text({:?})", text))?;

        let mut failures_left = self.failures_left.lock().map_err(|e| e.to_string())?;
        if *failures_left > 0 {
            *failures_left -= 1;
            return Err("display unavailable".into());
        }
        drop(failures_left);

        self.history
            .lock()
            .map_err(|e| e.to_string())?
            .push(text.to_string());
        Ok(())
    }
}
