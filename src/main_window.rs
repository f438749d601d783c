use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::{
    debug_tooling, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAIN_WINDOW_LABEL,
    MAIN_WINDOW_TITLE,
};

/// Fixed attributes of the main window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowOptions {
    pub(crate) width: f64,
    pub(crate) height: f64,
    /// Grants the loaded page a bridge into the shell process. The page is
    /// local but still a trust-boundary crossing; the grant is deliberate.
    pub(crate) host_bridge_integration: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            host_bridge_integration: true,
        }
    }
}

pub(crate) fn create_main_window(
    app_handle: &AppHandle,
    options: &WindowOptions,
    resource: &str,
    bridge_script: Option<&str>,
    open_debug_tools: bool,
    log: fn(&str),
) -> Result<WebviewWindow, String> {
    let mut builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::App(resource.into()),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(options.width, options.height);

    if let Some(script) = bridge_script {
        builder = builder.initialization_script(script);
    }

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    if open_debug_tools {
        debug_tooling::open_for_window(&window, log);
    }

    log(&format!(
        "main window created ({}x{}), loading {}",
        options.width, options.height, resource
    ));
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_options_match_the_fixed_shape() {
        let options = WindowOptions::default();
        assert_eq!(options.width, 800.0);
        assert_eq!(options.height, 600.0);
        assert!(options.host_bridge_integration);
    }
}
