use crate::device_camera::interface::{CapturedImage, DeviceCamera};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum CaptureOutcome {
    Captured(CapturedImage),
    Cancelled,
    Failed(String),
}

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    outcome: CaptureOutcome,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, outcome: CaptureOutcome) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            outcome,
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture_photo(
        &self,
    ) -> Result<Option<CapturedImage>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing photo...")?;

        match &self.outcome {
            CaptureOutcome::Captured(image) => {
                self.logger.info("Photo captured")?;
                Ok(Some(image.clone()))
            }
            CaptureOutcome::Cancelled => {
                self.logger.info("Capture cancelled")?;
                Ok(None)
            }
            CaptureOutcome::Failed(message) => Err(message.clone().into()),
        }
    }
}
