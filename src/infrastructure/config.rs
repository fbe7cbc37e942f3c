//! Settings file loading

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Fixed relative path of the optional settings file
pub const SETTINGS_PATH: &str = "leech.toml";

/// Remote URL used when no settings file provides one
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/leech-bot/leech-log.git";

/// Immutable runtime settings, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub remote_url: String,
}

/// On-disk shape of leech.toml; every key is optional
#[derive(Debug, Deserialize)]
struct SettingsFile {
    remote_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `leech.toml` in the current directory.
    ///
    /// Never fails: a missing, unreadable, or malformed file is logged and
    /// the built-in defaults are used instead.
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_PATH))
    }

    /// Load settings from an explicit path, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "settings file unavailable, using defaults");
                return Settings::default();
            }
        };

        let file: SettingsFile = match toml::from_str(&contents) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "settings file malformed, using defaults");
                return Settings::default();
            }
        };

        Settings {
            remote_url: file
                .remote_url
                .unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string()),
        }
    }
}
