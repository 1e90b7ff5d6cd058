//! Table bounds and the robot pose that lives on them.

use crate::common::{ConfigError, PlaceError};
use crate::config::TableConfig;
use crate::facing::Facing;
use core::fmt;
use rand::Rng;

/// Position and facing of a placed robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub x: usize,
    pub y: usize,
    pub facing: Facing,
}

impl Pose {
    pub const fn new(x: usize, y: usize, facing: Facing) -> Self {
        Self { x, y, facing }
    }

    /// Same position, new facing.
    pub fn turned(self, facing: Facing) -> Self {
        Self { facing, ..self }
    }
}

/// Renders the report line, e.g. `Output: 3,3,NORTH`.
impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output: {},{},{}", self.x, self.y, self.facing)
    }
}

/// Immutable W×H table. Valid cells are `[0, W-1] × [0, H-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    width: usize,
    height: usize,
}

impl Default for Table {
    fn default() -> Self {
        let config = TableConfig::default();
        Table {
            width: config.board_width,
            height: config.board_height,
        }
    }
}

impl Table {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::from_config(&TableConfig::new(width, height))
    }

    pub fn from_config(config: &TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Table {
            width: config.board_width,
            height: config.board_height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_x(&self) -> usize {
        self.width - 1
    }

    pub fn max_y(&self) -> usize {
        self.height - 1
    }

    /// Signed check, so parsed coordinates can be tested before conversion.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        0 <= x && (x as u64) < self.width as u64 && 0 <= y && (y as u64) < self.height as u64
    }

    pub fn contains_pose(&self, pose: &Pose) -> bool {
        pose.x < self.width && pose.y < self.height
    }

    /// Bounds failure carrying this table's inclusive ranges.
    pub fn out_of_bounds(&self) -> PlaceError {
        PlaceError::OutOfBounds {
            max_x: self.max_x(),
            max_y: self.max_y(),
        }
    }

    /// The cell one step ahead of `pose`, or `None` when that step leaves the table.
    pub fn step(&self, pose: &Pose) -> Option<Pose> {
        let (dx, dy) = pose.facing.delta();
        let x = pose.x.checked_add_signed(dx)?;
        let y = pose.y.checked_add_signed(dy)?;
        let next = Pose::new(x, y, pose.facing);
        self.contains_pose(&next).then_some(next)
    }

    /// Uniformly random pose on the table.
    pub fn random_pose<R: Rng>(&self, rng: &mut R) -> Pose {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        let facing = Facing::ALL[rng.random_range(0..Facing::ALL.len())];
        Pose::new(x, y, facing)
    }
}
