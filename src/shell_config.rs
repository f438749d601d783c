use std::env;

use crate::{DEBUG_CLI_FLAG, DEBUG_ENV_VAR};

/// Immutable shell configuration, built once at process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShellConfig {
    pub(crate) debug_enabled: bool,
}

impl ShellConfig {
    pub(crate) fn from_environment() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        let env_value = env::var(DEBUG_ENV_VAR).ok();
        Self {
            debug_enabled: resolve_debug_enabled(&args, env_value.as_deref()),
        }
    }
}

/// Debug mode is enabled by a `--debug` argument (substring match) or by
/// `DEBUG_ENABLED` set to the literal string "true". Anything else,
/// including an absent signal, leaves it disabled.
pub(crate) fn resolve_debug_enabled(args: &[String], env_value: Option<&str>) -> bool {
    debug_flag_in_args(args) || env_value == Some("true")
}

fn debug_flag_in_args(args: &[String]) -> bool {
    args.iter().any(|arg| arg.contains(DEBUG_CLI_FLAG))
}
