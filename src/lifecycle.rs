use crate::{exit_policy, main_window::WindowOptions, shell_config::ShellConfig, INDEX_RESOURCE};

/// Seam between the shell's lifecycle logic and the windowing framework.
/// The real implementation wraps the Tauri runtime; tests drive the shell
/// with a recording host.
pub(crate) trait WindowingHost {
    type Window;

    /// Arms the optional debug-tooling integration. Called at most once,
    /// before any lifecycle event is handled.
    fn activate_debug_tooling(&mut self);

    /// Creates the window and points it at the given page resource. Tauri
    /// takes the page URL at window construction, so creation and load are
    /// one host call here.
    fn create_window(
        &mut self,
        options: &WindowOptions,
        resource: &str,
    ) -> Result<Self::Window, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseOutcome {
    Exit,
    StayResident,
}

/// The application shell: one window, one page, two lifecycle events.
pub(crate) struct AppShell<H: WindowingHost> {
    config: ShellConfig,
    host: H,
    main_window: Option<H::Window>,
    log: fn(&str),
}

impl<H: WindowingHost> AppShell<H> {
    pub(crate) fn new(config: ShellConfig, host: H, log: fn(&str)) -> Self {
        Self {
            config,
            host,
            main_window: None,
            log,
        }
    }

    pub(crate) fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Pre-event-loop phase. Debug tooling is activated before the ready
    /// event is handled so it covers the window from its first paint.
    pub(crate) fn start(&mut self) {
        if self.config.debug_enabled {
            self.host.activate_debug_tooling();
        }
    }

    /// Handles the framework's "ready" signal: creates the main window with
    /// the fixed options and loads the bundled page into it. The stored
    /// window handle guards against a duplicate delivery.
    pub(crate) fn on_ready(&mut self) -> Result<(), String> {
        if self.main_window.is_some() {
            (self.log)("ready delivered twice; main window already exists");
            return Ok(());
        }

        let options = WindowOptions::default();
        let window = self.host.create_window(&options, INDEX_RESOURCE)?;
        self.main_window = Some(window);
        Ok(())
    }

    /// Handles the framework's "all windows closed" signal. The window
    /// handle distinguishes "all closed" from "no window was ever created";
    /// in the latter case there is nothing to exit for.
    pub(crate) fn on_all_windows_closed(&mut self) -> CloseOutcome {
        self.on_all_windows_closed_for_os(std::env::consts::OS)
    }

    fn on_all_windows_closed_for_os(&mut self, os: &str) -> CloseOutcome {
        if self.main_window.is_none() {
            (self.log)("all-windows-closed before any window was created; ignoring");
            return CloseOutcome::StayResident;
        }

        if exit_policy::should_exit_on_all_windows_closed(os) {
            CloseOutcome::Exit
        } else {
            CloseOutcome::StayResident
        }
    }
}
