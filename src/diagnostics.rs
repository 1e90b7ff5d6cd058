//! Diagnostic events emitted by the robot and the sinks that receive them.
//!
//! The engine never talks to a global logger. It reports what happened to a
//! [`DiagnosticSink`] handed to it at construction, so callers decide whether
//! events go to the `log` facade, into a buffer, or nowhere.

use crate::command::CommandKind;
use crate::common::PlaceError;
use crate::facing::Facing;
use crate::table::Pose;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::Level;

/// Something worth telling an operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Placed(Pose),
    PlaceRejected(PlaceError),
    Moved { from: Pose, to: Pose },
    /// Move suppressed at the table edge.
    MoveBlocked(Pose),
    Rotated { from: Facing, to: Facing },
    Reported(Pose),
    /// Command ignored because the robot is not on the table.
    NotPlaced(CommandKind),
    UnknownCommand(String),
}

impl Event {
    pub fn level(&self) -> Level {
        match self {
            Event::Placed(_) | Event::Moved { .. } | Event::Rotated { .. } | Event::Reported(_) => {
                Level::Info
            }
            Event::MoveBlocked(_) => Level::Warn,
            Event::PlaceRejected(_) | Event::NotPlaced(_) | Event::UnknownCommand(_) => {
                Level::Error
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Placed(p) => write!(f, "Robot placed at ({}, {}) facing {}", p.x, p.y, p.facing),
            Event::PlaceRejected(e) => write!(f, "{}", e),
            Event::Moved { from, to } => write!(
                f,
                "Moved from ({}, {}) to ({}, {}), facing {}",
                from.x, from.y, to.x, to.y, to.facing
            ),
            Event::MoveBlocked(p) => write!(
                f,
                "Move ignored to prevent falling off the table from ({}, {}) facing {}",
                p.x, p.y, p.facing
            ),
            Event::Rotated { from, to } => write!(f, "Robot rotated from {} to {}", from, to),
            Event::Reported(p) => write!(f, "{}", p),
            Event::NotPlaced(kind) => write!(
                f,
                "{} command ignored: Robot is not placed on the table.",
                kind
            ),
            Event::UnknownCommand(text) => write!(f, "Invalid command: {}", text),
        }
    }
}

/// Receiver of diagnostic events.
pub trait DiagnosticSink {
    fn record(&mut self, event: &Event);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, event: &Event) {
        (**self).record(event)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _event: &Event) {}
}

/// Forwards events to the `log` facade at each event's level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, event: &Event) {
        log::log!(target: "toy_robot", event.level(), "{}", event);
    }
}

/// Keeps every event in order, mostly for tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<Event>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
