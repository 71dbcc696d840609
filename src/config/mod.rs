// ABOUTME: Runtime list configuration: the line DSL, built-in defaults, and file locations.
// ABOUTME: Resolves the well-known runtimes.txt path and reads it into parsed lines.

mod defaults;
mod init;
mod line;

pub use defaults::{DEFAULT_RUNTIMES, TEMPLATE};
pub use init::{TemplateStatus, ensure_config_exists};
pub use line::{ConfigLine, LineError, RejectedLine, parse_runtime_list};

use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "runtimes.txt";
pub const APP_DIR: &str = "xrruntime";

/// Well-known location of the user's runtime list.
///
/// Windows: `runtimes.txt` in the working directory. Elsewhere:
/// `xrruntime/runtimes.txt` under the platform config directory
/// (`$XDG_CONFIG_HOME`, else `~/.config` on Linux).
pub fn config_path() -> Option<PathBuf> {
    if cfg!(windows) {
        return Some(PathBuf::from(CONFIG_FILENAME));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Read the user's runtime list.
///
/// A missing file is not an error and yields `Ok(None)`.
pub fn read_user_config(path: &Path) -> std::io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let text = read_user_config(&dir.path().join("runtimes.txt")).unwrap();
        assert!(text.is_none());
    }
}
