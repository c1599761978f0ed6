//! Move targets on the board.
//!
//! An [`Action`] is a `(row, col)` pair. Whether it is legal depends on the
//! board it is played on, so construction only checks bounds.

use crate::error::ParseError;
use crate::types::SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A `(row, col)` coordinate pair, both zero-based.
///
/// Ordering is row-major, which is also the order [`crate::actions`]
/// enumerates moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    row: usize,
    col: usize,
}

/// Unchecked wire form; bounds are enforced on conversion.
#[derive(Deserialize)]
struct RawAction {
    row: usize,
    col: usize,
}

impl TryFrom<RawAction> for Action {
    type Error = ParseError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        Action::try_from((raw.row, raw.col))
    }
}

impl Action {
    /// All 9 cells in row-major order.
    pub const ALL: [Action; SIZE * SIZE] = [
        Action::at(0, 0),
        Action::at(0, 1),
        Action::at(0, 2),
        Action::at(1, 0),
        Action::at(1, 1),
        Action::at(1, 2),
        Action::at(2, 0),
        Action::at(2, 1),
        Action::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Creates an action from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; SIZE * SIZE] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.to_index()]
    }
}

impl From<Action> for (usize, usize) {
    fn from(action: Action) -> Self {
        (action.row, action.col)
    }
}

impl TryFrom<(usize, usize)> for Action {
    type Error = ParseError;

    #[track_caller]
    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Action::new(row, col)
            .ok_or_else(|| ParseError::new(format!("({}, {}) is off the board", row, col)))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = ParseError;

    /// Parses `"row,col"`, `"row col"` or a cell label such as `center`.
    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if let [row, col] = parts.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
        {
            return Action::try_from((row, col));
        }

        let wanted = trimmed.to_lowercase().replace([' ', '_'], "-");
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.label().to_lowercase() == wanted)
            .ok_or_else(|| ParseError::new(format!("Cannot parse action from {:?}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.to_index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
        }
        assert_eq!(Action::from_index(9), None);
    }

    #[test]
    fn test_new_checks_bounds() {
        assert!(Action::new(2, 2).is_some());
        assert!(Action::new(3, 0).is_none());
        assert!(Action::new(0, 3).is_none());
    }

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("1,2".parse::<Action>().unwrap(), Action::at(1, 2));
        assert_eq!("0 2".parse::<Action>().unwrap(), Action::at(0, 2));
        assert_eq!("(2, 1)".parse::<Action>().unwrap(), Action::at(2, 1));
        assert!("3,0".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("center".parse::<Action>().unwrap(), Action::at(1, 1));
        assert_eq!("Top-left".parse::<Action>().unwrap(), Action::at(0, 0));
        assert_eq!("bottom right".parse::<Action>().unwrap(), Action::at(2, 2));
        assert!("somewhere".parse::<Action>().is_err());
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let action: Action = serde_json::from_str(r#"{"row":1,"col":2}"#).unwrap();
        assert_eq!(action, Action::at(1, 2));

        assert!(serde_json::from_str::<Action>(r#"{"row":3,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"row":0,"col":7}"#).is_err());
    }

    #[test]
    fn test_serialize_keeps_field_names() {
        let json = serde_json::to_string(&Action::at(2, 1)).unwrap();
        assert_eq!(json, r#"{"row":2,"col":1}"#);
        assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), Action::at(2, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::at(0, 2).to_string(), "(0, 2)");
        assert_eq!(Action::at(1, 1).label(), "Center");
    }
}
