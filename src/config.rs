//! Table dimensions and their defaults.

use crate::common::ConfigError;

pub const DEFAULT_BOARD_WIDTH: usize = 5;
pub const DEFAULT_BOARD_HEIGHT: usize = 5;

/// Construction-time table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default, deny_unknown_fields))]
pub struct TableConfig {
    /// Grid X-extent.
    pub board_width: usize,
    /// Grid Y-extent.
    pub board_height: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

impl TableConfig {
    pub const fn new(board_width: usize, board_height: usize) -> Self {
        Self {
            board_width,
            board_height,
        }
    }

    /// Both dimensions must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.board_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(())
    }

    /// Parse a JSON document such as `{"board_width": 7, "board_height": 3}`.
    /// Missing keys fall back to the defaults.
    #[cfg(feature = "std")]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(text)
            .map_err(|e| ConfigError::Malformed(std::format!("{}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    #[cfg(feature = "std")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(std::format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }
}
