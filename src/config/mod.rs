//! Client configuration.
//!
//! A small TOML file under the platform config directory selects the API
//! base URL; a missing file means defaults. The same directory also holds
//! the durable token file managed by [`crate::session::TokenStorage`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClientConfig, DEFAULT_API_BASE_URL};

use std::path::PathBuf;

/// Directory holding the config file and the persisted token.
///
/// `~/.config/mentor-match` on Unix/macOS, the platform equivalent
/// elsewhere. Falls back to the current directory when no config
/// directory is available.
pub fn app_config_dir() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config_dir.join("mentor-match")
}
