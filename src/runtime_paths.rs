use std::{env, path::PathBuf};

use crate::SHELL_ROOT_ENV;

/// Directory holding shell-owned files such as logs. Defaults to
/// `~/.pageframe`, overridable with `PAGEFRAME_ROOT`.
pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    shell_root_dir_from(env::var(SHELL_ROOT_ENV).ok().as_deref(), home::home_dir())
}

pub(crate) fn shell_root_dir_from(
    env_root: Option<&str>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(root) = env_root {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    home_dir.map(|home| home.join(".pageframe"))
}
