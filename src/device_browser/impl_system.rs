use crate::device_browser::interface::DeviceBrowser;
use crate::library::logger::interface::Logger;
use std::process::Command;
use std::sync::Arc;

/// Hands URLs to whatever the desktop uses to open links.
pub struct DeviceBrowserSystem {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceBrowserSystem {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("browser").with_namespace("system"),
        }
    }
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    // The empty string is the window title `start` expects before the target.
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

impl DeviceBrowser for DeviceBrowserSystem {
    fn open_url(&self, url: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Opening URL: {}", url))?;
        run_opener(opener(url))
    }
}

/// Waits for the opener so it is reaped; openers hand the URL off and exit quickly.
fn run_opener(mut command: Command) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let status = command.status()?;
    if !status.success() {
        return Err(format!("{:?} exited with {}", command.get_program(), status).into());
    }
    Ok(())
}
