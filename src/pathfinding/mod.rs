//! Shortest paths on the grid.
//!
//! - [`shortest_path`] — Breadth-first search between two cells, returned as
//!   drive actions
//! - [`search`] — The underlying search, exposing the visited tree

mod bfs;

pub use bfs::{search, shortest_path, SearchTree};
