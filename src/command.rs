//! Closed set of commands understood by the robot.

use crate::common::UnknownCommand;
use alloc::string::ToString;
use core::fmt;

pub const PLACE_KEYWORD: &str = "PLACE";

/// Keyword of a command, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Place,
        CommandKind::Move,
        CommandKind::Left,
        CommandKind::Right,
        CommandKind::Report,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Place => PLACE_KEYWORD,
            CommandKind::Move => "MOVE",
            CommandKind::Left => "LEFT",
            CommandKind::Right => "RIGHT",
            CommandKind::Report => "REPORT",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed command line. `Place` keeps the raw text for the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Place(&'a str),
    Move,
    Left,
    Right,
    Report,
}

impl<'a> Command<'a> {
    /// Parse an already uppercased and trimmed line.
    ///
    /// Any line starting with `PLACE` is a placement attempt; its arguments
    /// are checked later by the validator.
    pub fn parse(line: &'a str) -> Result<Self, UnknownCommand> {
        if line.starts_with(PLACE_KEYWORD) {
            return Ok(Command::Place(line));
        }
        match line {
            "MOVE" => Ok(Command::Move),
            "LEFT" => Ok(Command::Left),
            "RIGHT" => Ok(Command::Right),
            "REPORT" => Ok(Command::Report),
            other => Err(UnknownCommand(other.to_string())),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Place(_) => CommandKind::Place,
            Command::Move => CommandKind::Move,
            Command::Left => CommandKind::Left,
            Command::Right => CommandKind::Right,
            Command::Report => CommandKind::Report,
        }
    }
}
