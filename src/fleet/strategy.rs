//! Carrier count strategies.

use serde::{Deserialize, Serialize};

/// Requests per carrier used by the default heuristic.
pub const DEFAULT_REQUESTS_PER_CARRIER: usize = 4;

/// Decides how many carriers are dispatched for `n` requests.
///
/// Never more carriers than requests, and at least one carrier whenever
/// there is a request.
///
/// # Examples
///
/// ```
/// use grid_courier::fleet::CarrierCountStrategy;
///
/// let heuristic = CarrierCountStrategy::default();
/// assert_eq!(heuristic.carrier_count(0), 0);
/// assert_eq!(heuristic.carrier_count(4), 1);
/// assert_eq!(heuristic.carrier_count(5), 2);
/// assert_eq!(heuristic.carrier_count(40), 10);
///
/// let legacy = CarrierCountStrategy::Fixed(1);
/// assert_eq!(legacy.carrier_count(40), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierCountStrategy {
    /// A fixed fleet size, capped by the request count.
    Fixed(usize),
    /// One carrier per `requests_per_carrier` requests, rounded up.
    Heuristic {
        /// Target number of requests per carrier.
        requests_per_carrier: usize,
    },
}

impl CarrierCountStrategy {
    /// The single-carrier mode.
    pub const fn single() -> Self {
        Self::Fixed(1)
    }

    /// Number of carriers for `num_requests` requests.
    ///
    /// A zero fleet size or zero requests-per-carrier is treated as 1.
    pub fn carrier_count(&self, num_requests: usize) -> usize {
        if num_requests == 0 {
            return 0;
        }
        let wanted = match *self {
            Self::Fixed(carriers) => carriers,
            Self::Heuristic {
                requests_per_carrier,
            } => num_requests.div_ceil(requests_per_carrier.max(1)),
        };
        wanted.clamp(1, num_requests)
    }
}

impl Default for CarrierCountStrategy {
    fn default() -> Self {
        Self::Heuristic {
            requests_per_carrier: DEFAULT_REQUESTS_PER_CARRIER,
        }
    }
}
