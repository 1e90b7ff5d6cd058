//! Text view of the table with the robot's glyph in its cell.

use crate::table::{Pose, Table};
use core::fmt;

/// Grid snapshot; the top line is the highest `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    width: usize,
    height: usize,
    robot: Option<Pose>,
}

/// Build the view for `pose` on `table`. A pose outside the table is not drawn.
pub fn render_grid(pose: Option<&Pose>, table: &Table) -> GridView {
    GridView {
        width: table.width(),
        height: table.height(),
        robot: pose.copied().filter(|p| table.contains_pose(p)),
    }
}

impl GridView {
    /// Cell contents at `(x, y)`, a space when empty.
    pub fn cell(&self, x: usize, y: usize) -> char {
        match self.robot {
            Some(p) if p.x == x && p.y == y => p.facing.glyph(),
            _ => ' ',
        }
    }

    pub fn rows(&self) -> usize {
        self.height
    }
}

impl fmt::Display for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let y = self.height - 1 - row;
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "[{}]", self.cell(x, y))?;
            }
            if row + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
