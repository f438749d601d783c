pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Pageframe";

/// Bundled page loaded into the main window, resolved by the webview against
/// the app's frontend directory.
pub(crate) const INDEX_RESOURCE: &str = "index.html";

pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 800.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

pub(crate) const DEBUG_ENV_VAR: &str = "DEBUG_ENABLED";
pub(crate) const DEBUG_CLI_FLAG: &str = "--debug";

pub(crate) const SHELL_ROOT_ENV: &str = "PAGEFRAME_ROOT";
pub(crate) const DESKTOP_LOG_FILE: &str = "pageframe-desktop.log";
