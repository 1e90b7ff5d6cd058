//! Commonly used types and utilities for ease of import.

pub use crate::{
    render_grid, Command, DiagnosticSink, Event, Facing, Outcome, PlaceError, Pose, RobotState,
    Table, TableConfig, ToyRobot,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Console, ConsoleOptions, LogSink};
