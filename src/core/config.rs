//! Engine configuration.
//!
//! Every tunable constant of the rules lives here:
//! - `board_size`: grid dimension (the ring topology only exists for 5)
//! - `win_length`: how many aligned cells make a winning segment
//! - `neutral_center`: whether the center acts as a wildcard inside segments
//! - `win_on_place`: whether a placement is checked for a win before rotating
//!
//! Hosts may load the config from any serde format and must pass it through
//! [`EngineConfig::validate`] (done by `Engine::new`).

use serde::{Deserialize, Serialize};

use super::coord::BOARD_SIZE;
use super::error::ConfigError;

/// Rule constants for an engine instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid dimension. Only `BOARD_SIZE` is accepted.
    pub board_size: usize,

    /// Length of a winning segment.
    pub win_length: usize,

    /// Center cell matches any color and never breaks a segment.
    /// When false it is evaluated as an ordinary empty cell.
    pub neutral_center: bool,

    /// Check the placed color for a win right after placement, before the
    /// rings rotate.
    pub win_on_place: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            win_length: 5,
            neutral_center: true,
            win_on_place: true,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the winning segment length.
    #[must_use]
    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = length;
        self
    }

    /// Set whether the center is neutral.
    #[must_use]
    pub fn with_neutral_center(mut self, neutral: bool) -> Self {
        self.neutral_center = neutral;
        self
    }

    /// Set whether placements are checked for a win before rotation.
    #[must_use]
    pub fn with_win_on_place(mut self, enabled: bool) -> Self {
        self.win_on_place = enabled;
        self
    }

    /// Check the configuration is one the engine can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size != BOARD_SIZE {
            return Err(ConfigError::UnsupportedBoardSize(self.board_size));
        }
        if self.win_length == 0 || self.win_length > self.board_size {
            return Err(ConfigError::InvalidWinLength {
                win_length: self.win_length,
                board_size: self.board_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.win_length, 5);
        assert!(config.neutral_center);
        assert!(config.win_on_place);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_win_length(4)
            .with_neutral_center(false)
            .with_win_on_place(false);

        assert_eq!(config.win_length, 4);
        assert!(!config.neutral_center);
        assert!(!config.win_on_place);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_other_board_sizes() {
        let config = EngineConfig::new().with_board_size(7);
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedBoardSize(7)));
    }

    #[test]
    fn test_rejects_bad_win_length() {
        for length in [0, 6] {
            let config = EngineConfig::new().with_win_length(length);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidWinLength { win_length: length, board_size: 5 })
            );
        }
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"win_on_place": false}"#).unwrap();
        assert_eq!(config, EngineConfig::default().with_win_on_place(false));
    }
}
