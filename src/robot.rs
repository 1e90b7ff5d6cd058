//! The robot state machine: placement, movement, rotation and reporting.

use crate::command::{Command, CommandKind};
use crate::common::PlaceError;
use crate::config::TableConfig;
use crate::diagnostics::{DiagnosticSink, Event, NullSink};
use crate::facing::Facing;
use crate::table::{Pose, Table};
use crate::validation::TableValidator;
use alloc::string::{String, ToString};

/// Whether the robot is on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed(Pose),
}

impl RobotState {
    pub fn pose(&self) -> Option<&Pose> {
        match self {
            RobotState::Unplaced => None,
            RobotState::Placed(pose) => Some(pose),
        }
    }
}

/// What a single command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Placed(Pose),
    /// Placement failed validation; state unchanged.
    Rejected(PlaceError),
    Moved(Pose),
    /// Move would have left the table; pose unchanged.
    Blocked(Pose),
    Rotated(Facing),
    Reported(String),
    /// Command ignored while unplaced.
    NotPlaced(CommandKind),
}

/// Core engine holding the table and the robot's state.
///
/// Every mutation keeps a placed robot inside the table. Commands issued
/// before a valid placement are no-ops.
pub struct ToyRobot<D: DiagnosticSink = NullSink> {
    validator: TableValidator,
    state: RobotState,
    last_error: Option<PlaceError>,
    sink: D,
}

impl ToyRobot<NullSink> {
    /// Unplaced robot on the default 5×5 table, diagnostics discarded.
    pub fn new() -> Self {
        Self::with_sink(Table::default(), NullSink)
    }
}

impl Default for ToyRobot<NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiagnosticSink> ToyRobot<D> {
    pub fn with_sink(table: Table, sink: D) -> Self {
        Self {
            validator: TableValidator::new(table),
            state: RobotState::Unplaced,
            last_error: None,
            sink,
        }
    }

    pub fn from_config(
        config: &TableConfig,
        sink: D,
    ) -> Result<Self, crate::common::ConfigError> {
        Ok(Self::with_sink(Table::from_config(config)?, sink))
    }

    pub fn table(&self) -> &Table {
        self.validator.table()
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn pose(&self) -> Option<&Pose> {
        self.state.pose()
    }

    pub fn is_placed(&self) -> bool {
        self.validator.is_placed(&self.state)
    }

    /// Most recent placement failure, cleared by a successful placement.
    pub fn last_error(&self) -> Option<&PlaceError> {
        self.last_error.as_ref()
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }

    /// Validate `raw` and, on success, replace any previous pose.
    pub fn place(&mut self, raw: &str) -> Result<Pose, PlaceError> {
        match self.validator.validate_place(raw) {
            Ok(placement) => {
                let pose = placement.pose();
                self.state = RobotState::Placed(pose);
                self.last_error = None;
                self.sink.record(&Event::Placed(pose));
                Ok(pose)
            }
            Err(e) => {
                self.sink.record(&Event::PlaceRejected(e.clone()));
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Step one cell forward, unless that would leave the table.
    pub fn move_forward(&mut self) -> Outcome {
        let Some(from) = self.placed_or_ignore(CommandKind::Move) else {
            return Outcome::NotPlaced(CommandKind::Move);
        };
        match self.table().step(&from) {
            Some(to) => {
                self.state = RobotState::Placed(to);
                self.sink.record(&Event::Moved { from, to });
                Outcome::Moved(to)
            }
            None => {
                self.sink.record(&Event::MoveBlocked(from));
                Outcome::Blocked(from)
            }
        }
    }

    pub fn left(&mut self) -> Outcome {
        self.rotate(CommandKind::Left, Facing::left)
    }

    pub fn right(&mut self) -> Outcome {
        self.rotate(CommandKind::Right, Facing::right)
    }

    /// `Output: x,y,FACING`, or `None` while unplaced.
    pub fn report(&mut self) -> Option<String> {
        let pose = self.placed_or_ignore(CommandKind::Report)?;
        self.sink.record(&Event::Reported(pose));
        Some(pose.to_string())
    }

    pub fn execute(&mut self, command: Command<'_>) -> Outcome {
        match command {
            Command::Place(raw) => match self.place(raw) {
                Ok(pose) => Outcome::Placed(pose),
                Err(e) => Outcome::Rejected(e),
            },
            Command::Move => self.move_forward(),
            Command::Left => self.left(),
            Command::Right => self.right(),
            Command::Report => match self.report() {
                Some(line) => Outcome::Reported(line),
                None => Outcome::NotPlaced(CommandKind::Report),
            },
        }
    }

    fn rotate(&mut self, kind: CommandKind, turn: fn(Facing) -> Facing) -> Outcome {
        let Some(pose) = self.placed_or_ignore(kind) else {
            return Outcome::NotPlaced(kind);
        };
        let to = turn(pose.facing);
        self.state = RobotState::Placed(pose.turned(to));
        self.sink.record(&Event::Rotated {
            from: pose.facing,
            to,
        });
        Outcome::Rotated(to)
    }

    fn placed_or_ignore(&mut self, kind: CommandKind) -> Option<Pose> {
        match self.state {
            RobotState::Placed(pose) => Some(pose),
            RobotState::Unplaced => {
                self.sink.record(&Event::NotPlaced(kind));
                None
            }
        }
    }
}
