use classification_flow::core::Msg;
use classification_flow::main::ClassificationFlow;
use config::{ClassifierBackend, Config};
use device_browser::impl_system::DeviceBrowserSystem;
use device_camera::impl_file_dialog::DeviceCameraFileDialog;
use device_dialog::impl_rfd::DeviceDialogRfd;
use device_display::impl_gui::{run_window, DeviceDisplayGui};
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::sync::{Arc, Mutex};

mod classification_flow;
mod config;
mod device_browser;
mod device_camera;
mod device_dialog;
mod device_display;
mod error;
mod image_classifier;
mod library;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = match &config.classifier {
        ClassifierBackend::TractOnnx(model_config) => {
            match ImageClassifierTractOnnx::new(model_config.clone(), logger.clone()) {
                Ok(classifier) => Arc::new(classifier),
                Err(e) => {
                    logger.error(&format!("Cannot start without a classifier: {}", e))?;
                    return Err(Box::new(e));
                }
            }
        }
        ClassifierBackend::Fake => Arc::new(ImageClassifierFake::new(logger.clone())),
    };

    let device_camera = Arc::new(DeviceCameraFileDialog::new(logger.clone()));
    let device_dialog = Arc::new(DeviceDialogRfd::new(logger.clone()));
    let device_browser = Arc::new(DeviceBrowserSystem::new(logger.clone()));
    let device_display = DeviceDisplayGui::new();

    let flow = ClassificationFlow::new(
        config.clone(),
        logger.clone(),
        device_camera,
        Arc::new(Mutex::new(device_display.clone())),
        device_dialog,
        device_browser,
        image_classifier,
    );
    let msg_sender = flow.sender();

    let flow_thread = std::thread::spawn(move || flow.run());

    let window_result = run_window(
        &config.window,
        device_display,
        msg_sender.clone(),
        logger.clone(),
    );

    let _ = msg_sender.send(Msg::Quit);
    match flow_thread.join() {
        Ok(flow_result) => flow_result?,
        Err(_) => return Err("classification flow panicked".into()),
    }

    window_result
}
