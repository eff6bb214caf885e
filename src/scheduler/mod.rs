//! Top-level planning.
//!
//! - [`PlannerConfig`] — Carrier-count strategy and carrier naming
//! - [`ScheduleBuilder`] — Runs the whole pipeline on typed input
//! - [`optimize_delivery`] — JSON boundary that reports failures as data

mod builder;
mod config;

pub use builder::{optimize_delivery, ScheduleBuilder};
pub use config::PlannerConfig;
