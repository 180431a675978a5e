use crate::device_dialog::interface::DeviceDialog;
use crate::library::logger::interface::Logger;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::sync::Arc;

pub struct DeviceDialogRfd {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDialogRfd {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("dialog").with_namespace("rfd"),
        }
    }
}

impl DeviceDialog for DeviceDialogRfd {
    fn confirm(
        &self,
        title: &str,
        message: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Asking: {}", message))?;

        let answer = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();

        let confirmed = matches!(answer, MessageDialogResult::Yes | MessageDialogResult::Ok);
        self.logger.info(&format!("Answered {}", if confirmed { "yes" } else { "no" }))?;

        Ok(confirmed)
    }
}
