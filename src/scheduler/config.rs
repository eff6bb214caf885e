//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::fleet::CarrierCountStrategy;

/// Settings for a planning run.
///
/// # Examples
///
/// ```
/// use grid_courier::fleet::CarrierCountStrategy;
/// use grid_courier::scheduler::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.carrier_id(0), "car0");
///
/// let legacy = PlannerConfig::legacy();
/// assert_eq!(legacy.strategy, CarrierCountStrategy::Fixed(1));
/// assert_eq!(legacy.carrier_id(0), "car1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// How many carriers are dispatched.
    pub strategy: CarrierCountStrategy,
    /// Number appended to `car` for the first carrier.
    pub carrier_index_base: usize,
}

impl PlannerConfig {
    /// Single carrier named `car1`.
    pub fn legacy() -> Self {
        Self {
            strategy: CarrierCountStrategy::single(),
            carrier_index_base: 1,
        }
    }

    /// Sets the carrier-count strategy.
    pub fn with_strategy(mut self, strategy: CarrierCountStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the index of the first carrier name.
    pub fn with_carrier_index_base(mut self, base: usize) -> Self {
        self.carrier_index_base = base;
        self
    }

    /// Name of the carrier at fleet position `index`.
    pub fn carrier_id(&self, index: usize) -> String {
        format!("car{}", self.carrier_index_base + index)
    }
}
