use crate::device_dialog::interface::DeviceDialog;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Always gives the same answer and remembers what it was asked.
#[derive(Clone)]
pub struct DeviceDialogFake {
    logger: Arc<dyn Logger + Send + Sync>,
    answer: bool,
    questions: Arc<Mutex<Vec<String>>>,
}

impl DeviceDialogFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, answer: bool) -> Self {
        Self {
            logger: logger.with_namespace("dialog").with_namespace("fake"),
            answer,
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .map(|questions| questions.clone())
            .unwrap_or_default()
    }
}

impl DeviceDialog for DeviceDialogFake {
    fn confirm(
        &self,
        _title: &str,
        message: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("confirm({:?}) -> {}", message, self.answer))?;
        self.questions
            .lock()
            .map_err(|e| e.to_string())?
            .push(message.to_string());
        Ok(self.answer)
    }
}
