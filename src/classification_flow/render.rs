use super::main::ClassificationFlow;
use crate::classification_flow::core::State;

impl ClassificationFlow {
    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let display_state = state.display_state();

        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;
        device_display.show_text(display_state.text())?;

        Ok(())
    }
}
