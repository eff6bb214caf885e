//! Grid road network.
//!
//! Parses the textual map into a dense passability grid.

mod map;

pub use map::{GridMap, HEADQUARTERS, OPEN};
