//! Grid coordinate type.

use serde::{Deserialize, Serialize};

/// A cell on the grid: `x` is the column, `y` the row (row 0 is the first
/// line of the map text).
///
/// # Examples
///
/// ```
/// use grid_courier::models::Coordinate;
///
/// let a = Coordinate::new(1, 1);
/// assert!(a.is_adjacent(Coordinate::new(1, 2)));
/// assert!(!a.is_adjacent(Coordinate::new(2, 2)));
/// assert_eq!(a.manhattan(Coordinate::new(3, 0)), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours in search expansion order:
    /// left, right, up, down.
    ///
    /// The order fixes tie-breaking between equal-length paths.
    pub fn neighbors(self) -> [Coordinate; 4] {
        [
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
        ]
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns `true` if `other` differs by exactly one unit on exactly one axis.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_order() {
        let c = Coordinate::new(5, 5);
        assert_eq!(
            c.neighbors(),
            [
                Coordinate::new(4, 5),
                Coordinate::new(6, 5),
                Coordinate::new(5, 4),
                Coordinate::new(5, 6),
            ]
        );
    }

    #[test]
    fn test_adjacency() {
        let c = Coordinate::new(0, 0);
        assert!(c.is_adjacent(Coordinate::new(-1, 0)));
        assert!(c.is_adjacent(Coordinate::new(0, 1)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Coordinate::new(3, 7)).expect("serialize");
        assert_eq!(json, serde_json::json!({"x": 3, "y": 7}));
        let back: Coordinate = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, Coordinate::new(3, 7));
    }
}
