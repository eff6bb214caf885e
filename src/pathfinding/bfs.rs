//! Breadth-first search over the 4-connected grid.
//!
//! # Algorithm
//!
//! The search is seeded at the destination and stops once the origin is
//! dequeued. Every visited cell records the neighbour it was discovered
//! from, so following those links from the origin walks forward along the
//! path and yields it in travel order without a reversal.
//!
//! Neighbours are expanded left, right, up, down. Together with the FIFO
//! queue this fixes which of several equal-length paths is returned.
//!
//! # Complexity
//!
//! O(V) time and space in the cells reached before the origin is found.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::error::{PlanError, PlanResult};
use crate::grid::GridMap;
use crate::models::{Action, Coordinate};

/// Visited cells of one search and the link each was discovered through.
///
/// The link of a cell points one step closer to the search root (the
/// destination of the leg).
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: Coordinate,
    links: HashMap<Coordinate, Coordinate>,
    expanded: usize,
}

impl SearchTree {
    /// Cell the search was seeded at.
    pub fn root(&self) -> Coordinate {
        self.root
    }

    /// Returns `true` if the cell was reached.
    pub fn contains(&self, at: Coordinate) -> bool {
        at == self.root || self.links.contains_key(&at)
    }

    /// Next cell toward the root, or `None` at the root or for unvisited cells.
    pub fn next_hop(&self, at: Coordinate) -> Option<Coordinate> {
        self.links.get(&at).copied()
    }

    /// Number of cells reached, the root included.
    pub fn visited(&self) -> usize {
        self.links.len() + 1
    }

    /// Number of cells taken off the queue.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Drive actions from `from` to the root, both inclusive.
    ///
    /// Returns `None` if `from` was not reached.
    pub fn path_from(&self, from: Coordinate) -> Option<Vec<Action>> {
        if !self.contains(from) {
            return None;
        }
        let mut path = vec![Action::drive(from)];
        let mut current = from;
        while let Some(next) = self.next_hop(current) {
            path.push(Action::drive(next));
            current = next;
        }
        Some(path)
    }
}

/// Runs the search from `end` until `start` is dequeued or the frontier is
/// exhausted.
///
/// Cells outside the grid and walls are never entered. The seed itself is
/// not checked; callers decide whether a blocked destination is acceptable.
pub fn search(grid: &GridMap, start: Coordinate, end: Coordinate) -> SearchTree {
    let mut tree = SearchTree {
        root: end,
        links: HashMap::new(),
        expanded: 0,
    };
    let mut queue = VecDeque::from([end]);

    while let Some(current) = queue.pop_front() {
        tree.expanded += 1;
        if current == start {
            break;
        }
        for next in current.neighbors() {
            if !grid.is_passable(next) || tree.contains(next) {
                continue;
            }
            tree.links.insert(next, current);
            queue.push_back(next);
        }
    }

    tree
}

/// Computes a shortest leg from `start` to `end` as drive actions, both
/// endpoints included.
///
/// # Errors
///
/// [`PlanError::NoPath`] if either endpoint is blocked or outside the grid,
/// or no open route connects them.
///
/// # Examples
///
/// ```
/// use grid_courier::grid::GridMap;
/// use grid_courier::models::{Action, Coordinate};
/// use grid_courier::pathfinding::shortest_path;
///
/// let grid = GridMap::parse("#####\n#   #\n#####").unwrap();
/// let path = shortest_path(&grid, Coordinate::new(1, 1), Coordinate::new(3, 1)).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[0], Action::drive(Coordinate::new(1, 1)));
/// assert_eq!(path[2], Action::drive(Coordinate::new(3, 1)));
/// ```
pub fn shortest_path(grid: &GridMap, start: Coordinate, end: Coordinate) -> PlanResult<Vec<Action>> {
    if !grid.is_passable(start) || !grid.is_passable(end) {
        return Err(PlanError::no_path(start, end));
    }
    let tree = search(grid, start, end);
    let path = tree
        .path_from(start)
        .ok_or(PlanError::no_path(start, end))?;
    trace!(?start, ?end, steps = path.len() - 1, expanded = tree.expanded(), "leg");
    Ok(path)
}
