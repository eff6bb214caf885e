//! Fleet sizing and request assignment.
//!
//! - [`CarrierCountStrategy`] — How many carriers serve a request list
//! - [`partition`] — Contiguous, load-balanced split of requests into
//!   carrier groups

mod partition;
mod strategy;

pub use partition::{partition, split_contiguous, CarrierGroup};
pub use strategy::{CarrierCountStrategy, DEFAULT_REQUESTS_PER_CARRIER};
