use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
}

/// Markers for the two players. The first player moves first.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_marker: char,
    pub second_marker: char,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_marker: '\u{2663}',
            second_marker: '\u{2665}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clear the terminal before drawing the board.
    pub clear_screen: bool,
    pub show_column_numbers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            clear_screen: true,
            show_column_numbers: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
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

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("players.first_marker", self.players.first_marker),
            ("players.second_marker", self.players.second_marker),
        ];
        for (name, marker) in markers {
            // A blank marker would be indistinguishable from an empty cell
            if marker.is_whitespace() {
                return Err(ConfigError::Validation(format!(
                    "{name} must not be whitespace"
                )));
            }
            if marker.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a printable character"
                )));
            }
        }
        if self.players.first_marker == self.players.second_marker {
            return Err(ConfigError::Validation(
                "players.first_marker and players.second_marker must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
