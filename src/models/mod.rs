//! Domain model types for grid delivery planning.
//!
//! Provides the core values: grid coordinates, carrier actions, delivery
//! requests (raw and annotated with their delivery legs), and the
//! per-carrier schedule that planning produces.

mod action;
mod coordinate;
mod request;
mod schedule;

pub use action::{Action, RequestId};
pub use coordinate::Coordinate;
pub use request::{DeliveryPlan, DeliveryRequest, RequestInput, RequestSet};
pub use schedule::{CarrierSchedule, Schedule};
