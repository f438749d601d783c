use tauri::AppHandle;

use crate::{
    host_bridge,
    lifecycle::WindowingHost,
    main_window::{self, WindowOptions},
    ShellBridgeInfo,
};

/// Tauri-backed implementation of the windowing host seam.
pub(crate) struct TauriHost {
    app_handle: AppHandle,
    debug_tooling: bool,
    log: fn(&str),
}

impl TauriHost {
    pub(crate) fn new(app_handle: AppHandle, log: fn(&str)) -> Self {
        Self {
            app_handle,
            debug_tooling: false,
            log,
        }
    }

    fn bridge_info(&self) -> ShellBridgeInfo {
        ShellBridgeInfo {
            desktop_runtime: true,
            shell_version: self.app_handle.package_info().version.to_string(),
            debug_enabled: self.debug_tooling,
        }
    }
}

impl WindowingHost for TauriHost {
    type Window = tauri::WebviewWindow;

    fn activate_debug_tooling(&mut self) {
        self.debug_tooling = true;
        (self.log)("debug tooling activated; devtools will open with the main window");
    }

    fn create_window(
        &mut self,
        options: &WindowOptions,
        resource: &str,
    ) -> Result<Self::Window, String> {
        let bridge_script = options
            .host_bridge_integration
            .then(|| host_bridge::bridge_init_script(&self.bridge_info()));

        main_window::create_main_window(
            &self.app_handle,
            options,
            resource,
            bridge_script.as_deref(),
            self.debug_tooling,
            self.log,
        )
    }
}
