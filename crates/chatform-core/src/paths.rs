//! Filesystem locations for config and logs

use std::path::PathBuf;

use crate::constants;

/// Root config directory (`~/.chatform`)
///
/// Falls back to the current directory when no home directory can be resolved.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::ui::CONFIG_DIR_NAME)
}

/// Default config file path (`~/.chatform/config.toml`)
pub fn config_file() -> PathBuf {
    config_dir().join(constants::ui::CONFIG_FILE_NAME)
}

/// Log directory (`~/.chatform/logs`)
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
