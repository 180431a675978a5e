use crate::device_camera::interface::{CapturedImage, DeviceCamera};
use crate::library::logger::interface::Logger;
use std::sync::Arc;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "tif", "tiff", "gif"];

/// Lets the user pick a photo with the system file dialog.
pub struct DeviceCameraFileDialog {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFileDialog {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("file_dialog"),
        }
    }
}

impl DeviceCamera for DeviceCameraFileDialog {
    fn capture_photo(
        &self,
    ) -> Result<Option<CapturedImage>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening photo picker...")?;

        let Some(path) = rfd::FileDialog::new()
            .set_title("Take photo")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            self.logger.info("Photo picker cancelled")?;
            return Ok(None);
        };

        let bytes = std::fs::read(&path)?;
        self.logger
            .info(&format!("Picked {} ({} bytes)", path.display(), bytes.len()))?;

        Ok(Some(CapturedImage::new(bytes, path.display().to_string())))
    }
}
