//! Validation of `PLACE X,Y,F` text against a table.

use crate::command::{CommandKind, PLACE_KEYWORD};
use crate::common::{PlaceError, PLACE_OK_MESSAGE};
use crate::facing::Facing;
use crate::robot::RobotState;
use crate::table::{Pose, Table};
use core::num::IntErrorKind;

/// A placement that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub facing: Facing,
}

impl Placement {
    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.facing)
    }

    pub fn message(&self) -> &'static str {
        PLACE_OK_MESSAGE
    }
}

/// Checks placement commands against fixed table bounds. Never mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableValidator {
    table: Table,
}

impl TableValidator {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Validate `PLACE X,Y,F`.
    ///
    /// Fields are checked left to right and the first failure is returned:
    /// field count, x, y, bounds (only once both parse), then facing.
    pub fn validate_place(&self, raw: &str) -> Result<Placement, PlaceError> {
        let args = raw
            .strip_prefix(PLACE_KEYWORD)
            .ok_or(PlaceError::InvalidFormat)?
            .trim();

        let mut fields = args.split(',').map(str::trim);
        let (x, y, facing) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(x), Some(y), Some(facing), None) => (x, y, facing),
            _ => return Err(PlaceError::ArgumentCount),
        };

        let x = parse_int(x).ok_or(PlaceError::InvalidX)?;
        let y = parse_int(y).ok_or(PlaceError::InvalidY)?;
        if !self.table.contains(x, y) {
            return Err(self.table.out_of_bounds());
        }
        let facing: Facing = facing.parse().map_err(|_| PlaceError::InvalidFacing)?;

        // contains() guarantees both are non-negative and below the table size
        Ok(Placement {
            x: x as usize,
            y: y as usize,
            facing,
        })
    }

    /// True iff the state carries a pose.
    pub fn is_placed(&self, state: &RobotState) -> bool {
        matches!(state, RobotState::Placed(_))
    }

    /// True for the five command keywords.
    pub fn is_known_command(&self, keyword: &str) -> bool {
        CommandKind::ALL.iter().any(|k| k.keyword() == keyword)
    }
}

/// Parse a signed decimal integer. Literals too large for `i64` saturate so
/// they still count as integers and fail the bounds check instead.
fn parse_int(field: &str) -> Option<i64> {
    match field.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_int;

    #[test]
    fn parse_int_accepts_signs_and_saturates() {
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("-1"), Some(-1));
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int("A"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("1.5"), None);
    }
}
