use crate::classification_flow::core::Msg;
use crate::config::WindowConfig;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// Display backed by an egui window. The window is run on the main thread by [`run_window`].
#[derive(Clone)]
pub struct DeviceDisplayGui {
    text: Arc<Mutex<String>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        Self {
            text: Arc::new(Mutex::new(String::new())),
            context: Arc::new(Mutex::new(None)),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn show_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.text.lock().map_err(|e| e.to_string())? = text.to_string();

        // Wake the window up; the flow thread writes while egui sleeps.
        if let Some(context) = self.context.lock().map_err(|e| e.to_string())?.as_ref() {
            context.request_repaint();
        }
        Ok(())
    }
}

struct PhotoWindow {
    text: Arc<Mutex<String>>,
    msg_sender: Sender<Msg>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PhotoWindow {
    /// Returns false once the flow has stopped listening.
    fn request_photo(&self) -> bool {
        match self.msg_sender.send(Msg::TakePhotoPressed) {
            Ok(()) => true,
            Err(_) => {
                let _ = self
                    .logger
                    .error("Classification flow has stopped, closing window");
                false
            }
        }
    }
}

impl eframe::App for PhotoWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let text = self
            .text
            .lock()
            .map(|text| text.clone())
            .unwrap_or_default();

        let mut flow_stopped = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                ui.label(egui::RichText::new(text).color(egui::Color32::BLACK).size(18.0));

                ui.add_space(20.0);

                if ui
                    .button(egui::RichText::new("Take photo").size(18.0))
                    .clicked()
                {
                    flow_stopped = !self.request_photo();
                }
            });
        });

        if flow_stopped {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Blocks until the window is closed.
pub fn run_window(
    config: &WindowConfig,
    display: DeviceDisplayGui,
    msg_sender: Sender<Msg>,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.inner_size)
            .with_resizable(false),
        ..Default::default()
    };

    let window = PhotoWindow {
        text: display.text.clone(),
        msg_sender,
        logger: logger.with_namespace("display").with_namespace("gui"),
    };
    let context = display.context.clone();

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| {
            if let Ok(mut slot) = context.lock() {
                *slot = Some(cc.egui_ctx.clone());
            }
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(window)
        }),
    )
    .map_err(|e| e.to_string().into())
}
