//! Game configuration loaded from TOML.
//!
//! ```toml
//! ai_difficulty = 4
//! ai_color = "red"
//! capture_chains = "stepwise"
//! ```

use checkers_core::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::rules::{CaptureChains, Checkers};
use crate::GameSession;

/// Errors that can occur when loading or changing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The AI difficulty is outside 1..=5.
    #[error("AI difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),
}

/// Settings consumed by the session and the AI driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Search depth of the AI, 1 to 5.
    pub ai_difficulty: u8,
    /// The color the computer plays.
    pub ai_color: Color,
    pub capture_chains: CaptureChains,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            ai_difficulty: 3,
            ai_color: Color::Black,
            capture_chains: CaptureChains::default(),
        }
    }
}

impl GameConfig {
    pub const MIN_DIFFICULTY: u8 = 1;
    pub const MAX_DIFFICULTY: u8 = 5;

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] if it is not valid TOML, or
    /// [`ConfigError::InvalidDifficulty`] if the difficulty is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        Self::check_difficulty(config.ai_difficulty)?;
        Ok(config)
    }

    /// Changes the AI difficulty, rejecting values outside 1..=5.
    pub fn set_ai_difficulty(&mut self, difficulty: u8) -> Result<(), ConfigError> {
        Self::check_difficulty(difficulty)?;
        self.ai_difficulty = difficulty;
        Ok(())
    }

    fn check_difficulty(difficulty: u8) -> Result<(), ConfigError> {
        if (Self::MIN_DIFFICULTY..=Self::MAX_DIFFICULTY).contains(&difficulty) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDifficulty(difficulty))
        }
    }

    /// Returns the rule set these settings select.
    pub fn rules(&self) -> Checkers {
        Checkers::new(self.capture_chains)
    }

    /// Starts a new game under these settings.
    pub fn new_session(&self) -> GameSession {
        GameSession::with_rules(self.rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.ai_difficulty, 3);
        assert_eq!(config.ai_color, Color::Black);
        assert_eq!(config.capture_chains, CaptureChains::Expanded);
    }

    #[test]
    fn test_parse_full_config() {
        let config = GameConfig::from_toml_str(
            r#"
ai_difficulty = 5
ai_color = "red"
capture_chains = "stepwise"
"#,
        )
        .unwrap();
        assert_eq!(config.ai_difficulty, 5);
        assert_eq!(config.ai_color, Color::Red);
        assert_eq!(config.rules(), Checkers::new(CaptureChains::Stepwise));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = GameConfig::from_toml_str("ai_difficulty = 1").unwrap();
        assert_eq!(config.ai_difficulty, 1);
        assert_eq!(config.ai_color, Color::Black);
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_out_of_range_difficulty() {
        let err = GameConfig::from_toml_str("ai_difficulty = 9").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDifficulty(9)));

        let mut config = GameConfig::default();
        assert!(config.set_ai_difficulty(0).is_err());
        assert_eq!(config.ai_difficulty, 3);
        config.set_ai_difficulty(5).unwrap();
        assert_eq!(config.ai_difficulty, 5);
    }

    #[test]
    fn test_invalid_toml() {
        let result = GameConfig::from_toml_str("ai_difficulty = [");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        let result = GameConfig::from_toml_str(r#"ai_color = "green""#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let config = GameConfig::load("/nonexistent/checkers.toml").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_new_session_uses_rules() {
        let config = GameConfig {
            capture_chains: CaptureChains::Stepwise,
            ..GameConfig::default()
        };
        let game = config.new_session();
        assert_eq!(game.rules().capture_chains, CaptureChains::Stepwise);
    }
}
