use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
}

/// Board size as written in the config file.
///
/// Kept as signed integers so that a negative value parses and is reported by
/// [`AppConfig::validate`] instead of failing deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: i64,
    pub height: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_WIDTH as i64,
            height: DEFAULT_HEIGHT as i64,
        }
    }
}

impl BoardConfig {
    /// Board dimensions, substituting the default for any invalid axis.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::or_default(self.width, self.height)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Out-of-range board values are kept and only logged: they are replaced
    /// per axis by [`BoardConfig::dimensions`], so a valid width or height in
    /// the same file still applies. Unreadable or unparsable files are errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        if let Err(err) = config.validate() {
            tracing::warn!(
                path = %path.display(),
                %err,
                "invalid board size in config, substituting defaults"
            );
        }
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = 1..=MAX_DIMENSION as i64;
        if !range.contains(&self.board.width) {
            return Err(ConfigError::Validation(format!(
                "board.width must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !range.contains(&self.board.height) {
            return Err(ConfigError::Validation(format!(
                "board.height must be in 1..={MAX_DIMENSION}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
