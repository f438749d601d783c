use tauri::{AppHandle, Manager};

use crate::{ShellBridgeInfo, ShellCell};

#[tauri::command]
pub(crate) fn shell_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn shell_bridge_get_shell_info(app_handle: AppHandle) -> ShellBridgeInfo {
    let debug_enabled = app_handle
        .try_state::<ShellCell>()
        .map(|state| state.debug_enabled())
        .unwrap_or(false);

    ShellBridgeInfo {
        desktop_runtime: true,
        shell_version: app_handle.package_info().version.to_string(),
        debug_enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_runtime_marker_is_always_true() {
        assert!(shell_bridge_is_desktop_runtime());
    }
}
