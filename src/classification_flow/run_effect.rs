use super::main::ClassificationFlow;
use crate::classification_flow::core::{Effect, Msg};
use crate::classification_flow::search::{search_prompt, SEARCH_DIALOG_TITLE};

impl ClassificationFlow {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::CapturePhoto => {
                let captured = self.device_camera.capture_photo();
                self.send(Msg::PhotoCaptureDone(captured));
            }
            Effect::Classify { image } => {
                let classified = self.image_classifier.classify(&image);
                self.send(Msg::ClassifyDone(classified));
            }
            Effect::ConfirmSearch { label } => {
                let prompt = search_prompt(&self.config.search, &label);
                let result = self.device_dialog.confirm(SEARCH_DIALOG_TITLE, &prompt);
                self.send(Msg::SearchConfirmDone { label, result });
            }
            Effect::OpenUrl { url } => {
                let opened = self.device_browser.open_url(&url);
                self.send(Msg::OpenUrlDone(opened));
            }
        }
    }
}
