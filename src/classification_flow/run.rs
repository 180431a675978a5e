use super::main::ClassificationFlow;
use crate::classification_flow::core::{init, transition, Effect, Msg, State};

impl ClassificationFlow {
    /// Runs until a `Msg::Quit` arrives.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_state, effects) = init();

        self.render_or_log(&current_state);
        self.execute_effects(effects);

        loop {
            let msg = self.recv()?;

            if matches!(msg, Msg::Quit) {
                self.logger.info("Quit")?;
                return Ok(());
            }

            self.log_msg(&current_state, &msg)?;

            let previous_display = current_state.display_state();
            let (new_state, effects) = transition(&self.config, current_state, msg);

            self.logger.info(&format!(
                "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
                new_state, effects
            ))?;

            if new_state.display_state() != previous_display {
                self.render_or_log(&new_state);
            }

            current_state = new_state;

            self.execute_effects(effects);
        }
    }

    /// A display failure must not stop the flow; the next state change renders again.
    fn render_or_log(&self, state: &State) {
        if let Err(e) = self.render(state) {
            let _ = self.logger.error(&format!("Failed to render: {}", e));
        }
    }

    fn log_msg(
        &self,
        state: &State,
        msg: &Msg,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "\nold state:\n\t{:?}\n\nmsg:\n\t{:?}",
            state, msg
        ))?;

        match msg {
            Msg::TakePhotoPressed if state.is_busy() => {
                self.logger
                    .info("Ignoring photo request, one is already in flight")?;
            }
            Msg::SearchConfirmDone {
                result: Err(e), ..
            } => {
                self.logger
                    .error(&format!("Search confirmation failed: {}", e))?;
            }
            Msg::OpenUrlDone(Err(e)) => {
                self.logger.error(&format!("Failed to open URL: {}", e))?;
            }
            _ => {}
        }

        Ok(())
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.execute_effect(effect));
        }
    }
}
