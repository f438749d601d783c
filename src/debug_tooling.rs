use tauri::WebviewWindow;

/// Opens the webview devtools for a freshly created window. The `devtools`
/// cargo feature keeps this available in release builds, where the runtime
/// debug flag is the only gate.
pub(crate) fn open_for_window(window: &WebviewWindow, log: fn(&str)) {
    window.open_devtools();
    log("devtools opened for main window");
}
