use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE};

/// Log lives under `<root>/logs/`; without a resolvable root it falls back
/// to the system temp directory so startup diagnostics are never lost.
pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .map(|root| root.join("logs"))
        .unwrap_or_else(env::temp_dir)
        .join(file_name)
}

/// Best-effort append. Logging must never take the shell down, so all I/O
/// errors are swallowed.
pub(crate) fn append_log_line(path: &Path, prefix: &str, message: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let line = format!(
        "[{}] [{prefix}] {message}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    );
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_to_desktop_log("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_to_desktop_log("desktop", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_to_desktop_log("shutdown", message);
}

fn append_to_desktop_log(prefix: &str, message: &str) {
    let path = resolve_desktop_log_path(
        runtime_paths::default_shell_root_dir(),
        DESKTOP_LOG_FILE,
    );
    append_log_line(&path, prefix, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_desktop_log_path_places_log_under_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/srv/shell")), "shell.log");
        assert_eq!(path, PathBuf::from("/srv/shell/logs/shell.log"));
    }

    #[test]
    fn resolve_desktop_log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "shell.log");
        assert_eq!(path, env::temp_dir().join("shell.log"));
    }

    #[test]
    fn append_log_line_creates_parents_and_appends() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs").join("shell.log");

        append_log_line(&path, "startup", "first");
        append_log_line(&path, "desktop", "second");

        let contents = fs::read_to_string(&path).expect("log file should exist");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[startup] first"));
        assert!(lines[1].contains("[desktop] second"));
    }
}
