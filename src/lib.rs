//! # grid-courier
//!
//! Delivery route planning on a grid road network: shortest paths between
//! cells, assignment of pickup/dropoff requests to carriers, and assembly
//! of each carrier's ordered drive/pickup/dropoff actions from a shared
//! headquarters.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Coordinate, Action, requests, Schedule)
//! - [`grid`] — Map text parsing into a passability grid
//! - [`pathfinding`] — Breadth-first shortest paths
//! - [`fleet`] — Carrier-count strategies and contiguous partitioning
//! - [`assembly`] — Per-carrier route assembly
//! - [`scheduler`] — End-to-end planning and the JSON boundary
//! - [`audit`] — Route rule checks and per-carrier summaries
//! - [`error`] — Error types

pub mod assembly;
pub mod audit;
pub mod error;
pub mod fleet;
pub mod grid;
pub mod models;
pub mod pathfinding;
pub mod scheduler;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ErrorKind, PlanError, PlanResult};
