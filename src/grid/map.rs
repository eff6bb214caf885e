//! Dense passability grid parsed from map text.

use std::num::TryFromIntError;

use crate::error::{PlanError, PlanResult};
use crate::models::Coordinate;

/// Marker of an open road cell.
pub const OPEN: char = ' ';

/// Marker of a headquarters cell. Normalized to [`OPEN`] when parsed.
pub const HEADQUARTERS: char = 'H';

/// A rectangular grid of passable and blocked cells, stored row-major.
///
/// # Examples
///
/// ```
/// use grid_courier::grid::GridMap;
/// use grid_courier::models::Coordinate;
///
/// let grid = GridMap::parse("###\n#H#\n# #\n###").unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 4));
/// assert!(grid.is_passable(Coordinate::new(1, 1)));
/// assert!(!grid.is_passable(Coordinate::new(0, 0)));
/// assert!(!grid.is_passable(Coordinate::new(-1, 1)));
/// assert_eq!(grid.headquarters_markers(), &[Coordinate::new(1, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    headquarters: Vec<Coordinate>,
}

impl GridMap {
    /// Parses row-delimited map text.
    ///
    /// Space and `H` are passable; any other character is a wall. A `\r`
    /// before each line break and a single trailing newline are accepted.
    ///
    /// # Errors
    ///
    /// [`PlanError::MalformedMap`] if the text has no rows or the rows differ
    /// in length.
    pub fn parse(text: &str) -> PlanResult<Self> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        if text.is_empty() {
            return Err(PlanError::malformed_map("map has no rows"));
        }

        let mut cells = Vec::new();
        let mut headquarters = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (y, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let row: Vec<char> = line.chars().collect();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(PlanError::malformed_map(format!(
                        "row {y} has length {}, expected {w}",
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            for (x, &marker) in row.iter().enumerate() {
                if marker == HEADQUARTERS {
                    headquarters.push(cell_coordinate(x, y)?);
                }
                cells.push(marker == OPEN || marker == HEADQUARTERS);
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(PlanError::malformed_map("map rows are empty"));
        }

        Ok(Self {
            cells,
            width,
            height,
            headquarters,
        })
    }

    /// Builds a fully open grid of the given size.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            cells: vec![true; width * height],
            width,
            height,
            headquarters: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the coordinate lies inside the grid.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.index(at).is_some()
    }

    /// Returns `true` if the cell is open road. Cells outside the grid are
    /// never passable.
    pub fn is_passable(&self, at: Coordinate) -> bool {
        self.index(at).is_some_and(|i| self.cells[i])
    }

    /// Coordinates of `H` markers in reading order.
    pub fn headquarters_markers(&self) -> &[Coordinate] {
        &self.headquarters
    }

    /// Number of passable cells.
    pub fn open_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn index(&self, at: Coordinate) -> Option<usize> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

/// Converts a row-major position to a coordinate. Maps wider or taller than
/// `i32::MAX` cells cannot be addressed.
fn cell_coordinate(x: usize, y: usize) -> PlanResult<Coordinate> {
    let too_large = |_: TryFromIntError| {
        PlanError::malformed_map(format!("cell ({x}, {y}) is out of coordinate range"))
    };
    Ok(Coordinate::new(
        i32::try_from(x).map_err(too_large)?,
        i32::try_from(y).map_err(too_large)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_dimensions() {
        let grid = GridMap::parse("#####\n#   #\n#####").expect("valid");
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.open_cells(), 3);
    }

    #[test]
    fn test_headquarters_is_open() {
        let grid = GridMap::parse("#H#\n# #").expect("valid");
        assert!(grid.is_passable(Coordinate::new(1, 0)));
        assert_eq!(grid.headquarters_markers(), &[Coordinate::new(1, 0)]);
    }

    #[test]
    fn test_any_other_marker_is_wall() {
        let grid = GridMap::parse("x.1 ").expect("valid");
        assert!(!grid.is_passable(Coordinate::new(0, 0)));
        assert!(!grid.is_passable(Coordinate::new(1, 0)));
        assert!(!grid.is_passable(Coordinate::new(2, 0)));
        assert!(grid.is_passable(Coordinate::new(3, 0)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = GridMap::parse("###\n##\n###").expect_err("ragged");
        assert_eq!(err.kind(), ErrorKind::MalformedMap);
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_empty_map_rejected() {
        assert_eq!(GridMap::parse("").expect_err("empty").kind(), ErrorKind::MalformedMap);
        assert_eq!(GridMap::parse("\n").expect_err("empty").kind(), ErrorKind::MalformedMap);
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let grid = GridMap::parse("# #\r\n   \r\n").expect("valid");
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(grid.is_passable(Coordinate::new(1, 0)));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let grid = GridMap::open(3, 3);
        assert!(grid.is_passable(Coordinate::new(2, 2)));
        assert!(!grid.is_passable(Coordinate::new(3, 0)));
        assert!(!grid.is_passable(Coordinate::new(0, -1)));
        assert!(!grid.contains(Coordinate::new(0, 3)));
    }

    #[test]
    fn test_cell_coordinate_range() {
        assert_eq!(cell_coordinate(4, 7).expect("in range"), Coordinate::new(4, 7));
        let limit = i32::MAX as usize;
        assert_eq!(
            cell_coordinate(limit, 0).expect("in range"),
            Coordinate::new(i32::MAX, 0)
        );
        let err = cell_coordinate(limit + 1, 0).expect_err("column overflow");
        assert_eq!(err.kind(), ErrorKind::MalformedMap);
        let err = cell_coordinate(0, limit + 1).expect_err("row overflow");
        assert_eq!(err.kind(), ErrorKind::MalformedMap);
    }
}
