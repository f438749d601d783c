use tauri::{Manager, RunEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log,
    lifecycle::{AppShell, CloseOutcome},
    logging, runtime_paths,
    shell_config::ShellConfig,
    tauri_host::TauriHost,
    ShellCell, DESKTOP_LOG_FILE,
};

pub(crate) fn run(config: ShellConfig) {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_shell_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));
    if config.debug_enabled {
        append_startup_log("debug mode enabled");
    }

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::shell_bridge_is_desktop_runtime,
            crate::bridge_commands::shell_bridge_get_shell_info,
        ])
        .setup(move |app| {
            let host = TauriHost::new(app.handle().clone(), append_desktop_log);
            let mut shell = AppShell::new(config, host, append_desktop_log);

            shell.start();
            shell.on_ready().map_err(|error| {
                append_startup_log(&format!("failed to open main window: {error}"));
                Box::<dyn std::error::Error>::from(error)
            })?;

            app.manage(ShellCell::new(shell));
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            // An exit request without a code is Tauri's "all windows
            // closed" signal; explicit exits carry one.
            RunEvent::ExitRequested { code: None, api, .. } => {
                let state = app_handle.state::<ShellCell>();
                if state.on_all_windows_closed() == CloseOutcome::StayResident {
                    append_desktop_log("all windows closed; staying resident");
                    api.prevent_exit();
                }
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
            }
            _ => {}
        });
}
