use crate::ShellBridgeInfo;

const BRIDGE_GLOBAL: &str = "__PAGEFRAME_DESKTOP__";

/// Initialization script injected before any page script runs. This hands
/// the loaded page a handle into the shell process; combined with the IPC
/// capability granted to the main window it is the shell's equivalent of
/// full scripting-context integration, and a known trust-boundary grant to
/// the page.
pub(crate) fn bridge_init_script(info: &ShellBridgeInfo) -> String {
    let payload = serde_json::to_string(info).unwrap_or_else(|_| "{}".to_string());
    format!("window.{BRIDGE_GLOBAL} = Object.freeze({payload});")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(debug_enabled: bool) -> ShellBridgeInfo {
        ShellBridgeInfo {
            desktop_runtime: true,
            shell_version: "0.1.0".to_string(),
            debug_enabled,
        }
    }

    #[test]
    fn bridge_init_script_exposes_a_frozen_global() {
        let script = bridge_init_script(&info(false));
        assert!(script.starts_with("window.__PAGEFRAME_DESKTOP__ = Object.freeze({"));
        assert!(script.ends_with("});"));
    }

    #[test]
    fn bridge_init_script_carries_the_shell_state() {
        let script = bridge_init_script(&info(true));
        assert!(script.contains("\"desktopRuntime\":true"));
        assert!(script.contains("\"shellVersion\":\"0.1.0\""));
        assert!(script.contains("\"debugEnabled\":true"));
    }
}
