//! Common types for the simulator: placement, command and configuration errors.

use alloc::string::String;
use core::fmt;

/// Message returned alongside a successful placement.
pub const PLACE_OK_MESSAGE: &str = "Place command validated successfully.";

/// Category of a placement failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceErrorKind {
    /// Missing keyword or wrong number of fields.
    FormatError,
    /// x or y is not an integer.
    TypeError,
    /// (x, y) lies outside the table.
    BoundsError,
    /// Facing is not one of the four names.
    DirectionError,
}

/// Errors returned when validating a `PLACE X,Y,F` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// Text does not start with the `PLACE` keyword.
    InvalidFormat,
    /// Field count after the keyword is not three.
    ArgumentCount,
    InvalidX,
    InvalidY,
    /// Coordinates outside `[0, max_x] × [0, max_y]`.
    OutOfBounds { max_x: usize, max_y: usize },
    InvalidFacing,
}

impl PlaceError {
    pub fn kind(&self) -> PlaceErrorKind {
        match self {
            PlaceError::InvalidFormat | PlaceError::ArgumentCount => PlaceErrorKind::FormatError,
            PlaceError::InvalidX | PlaceError::InvalidY => PlaceErrorKind::TypeError,
            PlaceError::OutOfBounds { .. } => PlaceErrorKind::BoundsError,
            PlaceError::InvalidFacing => PlaceErrorKind::DirectionError,
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::InvalidFormat => {
                write!(f, "Invalid command format. Expected \"PLACE X,Y,F\".")
            }
            PlaceError::ArgumentCount => {
                write!(f, "Invalid number of arguments. Expected \"PLACE X,Y,F\".")
            }
            PlaceError::InvalidX => write!(f, "Invalid x value. Please provide an integer."),
            PlaceError::InvalidY => write!(f, "Invalid y value. Please provide an integer."),
            PlaceError::OutOfBounds { max_x, max_y } => write!(
                f,
                "x or y value out of bounds. Expected x: 0 to {}, y: 0 to {}.",
                max_x, max_y
            ),
            PlaceError::InvalidFacing => write!(
                f,
                "Invalid facing direction. Allowed values: NORTH, EAST, SOUTH, WEST."
            ),
        }
    }
}

/// A line that matches none of the command keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid command: {}", self.0)
    }
}

/// Errors building a table from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    /// Config file could not be read.
    Unreadable(String),
    /// Config text is not valid JSON for `TableConfig`.
    Malformed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "board_width must be a positive integer"),
            ConfigError::ZeroHeight => write!(f, "board_height must be a positive integer"),
            ConfigError::Unreadable(e) => write!(f, "unable to read config: {}", e),
            ConfigError::Malformed(e) => write!(f, "malformed config: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlaceError {}
#[cfg(feature = "std")]
impl std::error::Error for UnknownCommand {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
