use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "My Window!!".to_string(),
            width: 640,
            height: 480,
            resizable: true,
        }
    }
}

/// Create the application window. Creation failure is fatal to the app; the
/// error is returned so the caller can exit with a failure code rather than
/// panicking inside the event loop.
pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<Arc<Window>, String> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable);

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| format!("Failed to create window: {e}"))?;
    log::info!(
        "Window created: \"{}\" {}x{}",
        config.title,
        config.width,
        config.height
    );
    Ok(Arc::new(window))
}
