//! Rule options and their TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Rule options for a game, loadable from TOML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Hand the turn straight back to the mover when the opponent has no legal move.
    /// Off by default: the turn always alternates and the game ends only when
    /// neither color can move.
    pub forced_pass: bool,
}

impl GameConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_forced_pass() {
        assert!(!GameConfig::default().forced_pass);
    }

    #[test]
    fn parse_forced_pass() {
        let config = GameConfig::from_toml_str("forced_pass = true").unwrap();
        assert!(config.forced_pass);
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GameConfig::from_toml_str("board_size = 6").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(GameConfig::from_toml_str("forced_pass = \"yes\"").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let path = Path::new("definitely/not/a/real/othello.toml");
        assert_eq!(GameConfig::load_or_default(path).unwrap(), GameConfig::default());
        assert!(matches!(
            GameConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("othello-config-{}.toml", std::process::id()));
        std::fs::write(&path, "forced_pass = true\n").unwrap();
        let loaded = GameConfig::load(&path);
        let fallback = GameConfig::load_or_default(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.unwrap(), GameConfig { forced_pass: true });
        assert_eq!(fallback.unwrap(), GameConfig { forced_pass: true });
    }

    #[test]
    fn load_rejects_unknown_keys_on_disk() {
        let path = std::env::temp_dir().join(format!("othello-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "forced_pass = false\nboard_size = 6\n").unwrap();
        let loaded = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(loaded, Err(ConfigError::TomlParse(_))));
    }
}
