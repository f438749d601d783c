/// macOS apps conventionally stay resident with no open windows; everywhere
/// else the shell exits when the last window closes.
pub(crate) fn should_exit_on_all_windows_closed(os: &str) -> bool {
    os != "macos"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_macos_platforms_exit_when_all_windows_close() {
        assert!(should_exit_on_all_windows_closed("linux"));
        assert!(should_exit_on_all_windows_closed("windows"));
    }

    #[test]
    fn macos_stays_resident_when_all_windows_close() {
        assert!(!should_exit_on_all_windows_closed("macos"));
    }
}
