use std::sync::Mutex;

use serde::Serialize;

use crate::{
    lifecycle::{AppShell, CloseOutcome},
    tauri_host::TauriHost,
};

/// Shell state snapshot handed to the loaded page, both through the
/// injected bridge global and the bridge commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellBridgeInfo {
    pub(crate) desktop_runtime: bool,
    pub(crate) shell_version: String,
    pub(crate) debug_enabled: bool,
}

/// Managed-state wrapper around the running shell. Written once in setup,
/// read from the run-event loop and the bridge commands.
pub(crate) struct ShellCell {
    shell: Mutex<AppShell<TauriHost>>,
}

impl ShellCell {
    pub(crate) fn new(shell: AppShell<TauriHost>) -> Self {
        Self {
            shell: Mutex::new(shell),
        }
    }

    pub(crate) fn debug_enabled(&self) -> bool {
        self.shell
            .lock()
            .map(|shell| shell.config().debug_enabled)
            .unwrap_or(false)
    }

    /// A poisoned lock falls through to exiting; staying resident with no
    /// windows and no working state would strand the process.
    pub(crate) fn on_all_windows_closed(&self) -> CloseOutcome {
        match self.shell.lock() {
            Ok(mut shell) => shell.on_all_windows_closed(),
            Err(_) => CloseOutcome::Exit,
        }
    }
}
