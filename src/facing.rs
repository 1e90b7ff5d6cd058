//! Compass facing of the robot and the rotations over it.

use core::fmt;
use core::str::FromStr;

/// Direction the robot is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "UPPERCASE"))]
pub enum Facing {
    North,
    East,
    South,
    West,
}

/// Order walked by successive left turns.
const LEFT_ORDER: [Facing; 4] = [Facing::North, Facing::West, Facing::South, Facing::East];
/// Order walked by successive right turns.
const RIGHT_ORDER: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

fn next_in(order: &[Facing; 4], current: Facing) -> Facing {
    // every facing appears exactly once in each order
    let idx = order.iter().position(|f| *f == current).unwrap_or(0);
    order[(idx + 1) % order.len()]
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Facing after a 90 degree counterclockwise turn.
    pub fn left(self) -> Facing {
        next_in(&LEFT_ORDER, self)
    }

    /// Facing after a 90 degree clockwise turn.
    pub fn right(self) -> Facing {
        next_in(&RIGHT_ORDER, self)
    }

    /// Unit step `(dx, dy)` taken by a move. North is +y.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Facing::North => (0, 1),
            Facing::East => (1, 0),
            Facing::South => (0, -1),
            Facing::West => (-1, 0),
        }
    }

    /// Glyph drawn for the robot in the grid view.
    pub fn glyph(self) -> char {
        match self {
            Facing::North => '^',
            Facing::East => '>',
            Facing::South => 'v',
            Facing::West => '<',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token that is not an exact uppercase facing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFacing;

impl FromStr for Facing {
    type Err = UnknownFacing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facing::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or(UnknownFacing)
    }
}
