use crate::classification_flow::core::Msg;
use crate::config::Config;
use crate::device_browser::interface::DeviceBrowser;
use crate::device_camera::interface::DeviceCamera;
use crate::device_dialog::interface::DeviceDialog;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Owns the flow state. Devices talk back to it only through `Msg`s.
#[derive(Clone)]
pub struct ClassificationFlow {
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub device_dialog: Arc<dyn DeviceDialog + Send + Sync>,
    pub device_browser: Arc<dyn DeviceBrowser + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl ClassificationFlow {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        device_dialog: Arc<dyn DeviceDialog + Send + Sync>,
        device_browser: Arc<dyn DeviceBrowser + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
            config,
            logger: logger.with_namespace("flow"),
            device_camera,
            device_display,
            device_dialog,
            device_browser,
            image_classifier,
        }
    }

    /// Handle for anything outside the flow that needs to send it messages, like the window.
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_sender.clone()
    }

    pub fn send(&self, msg: Msg) {
        if let Err(e) = self.msg_sender.send(msg) {
            let _ = self
                .logger
                .error(&format!("Dropped message, flow is gone: {:?}", e.0));
        }
    }

    pub fn recv(&self) -> Result<Msg, Box<dyn std::error::Error + Send + Sync>> {
        let receiver = self.msg_receiver.lock().map_err(|e| e.to_string())?;
        Ok(receiver.recv()?)
    }
}
