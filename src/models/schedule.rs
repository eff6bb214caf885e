//! Schedule output types.

use serde::{Deserialize, Serialize};

use super::Action;

/// The route of one carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierSchedule {
    /// Positional carrier name, e.g. `car0`.
    pub carrier_id: String,
    /// Ordered actions, starting with [`Action::Start`].
    pub actions: Vec<Action>,
}

impl CarrierSchedule {
    /// Creates a carrier schedule.
    pub fn new(carrier_id: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            carrier_id: carrier_id.into(),
            actions,
        }
    }

    /// Number of drive steps (cells moved).
    pub fn drive_steps(&self) -> usize {
        self.actions.iter().filter(|a| a.is_drive()).count()
    }
}

/// Per-carrier routes in carrier order. Serializes as a JSON array.
///
/// # Examples
///
/// ```
/// use grid_courier::models::{Action, CarrierSchedule, Coordinate, Schedule};
///
/// let mut schedule = Schedule::new();
/// schedule.add_carrier(CarrierSchedule::new(
///     "car0",
///     vec![Action::Start { at: Coordinate::new(0, 0) }],
/// ));
/// assert_eq!(schedule.num_carriers(), 1);
/// assert_eq!(schedule.carrier("car0").map(|c| c.actions.len()), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    carriers: Vec<CarrierSchedule>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a carrier route.
    pub fn add_carrier(&mut self, carrier: CarrierSchedule) {
        self.carriers.push(carrier);
    }

    /// Carrier routes in order.
    pub fn carriers(&self) -> &[CarrierSchedule] {
        &self.carriers
    }

    /// Looks up a carrier by id.
    pub fn carrier(&self, carrier_id: &str) -> Option<&CarrierSchedule> {
        self.carriers.iter().find(|c| c.carrier_id == carrier_id)
    }

    /// Number of carriers.
    pub fn num_carriers(&self) -> usize {
        self.carriers.len()
    }

    /// Returns `true` if no carrier was dispatched.
    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }

    /// Total drive steps across carriers.
    pub fn total_drive_steps(&self) -> usize {
        self.carriers.iter().map(CarrierSchedule::drive_steps).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use serde_json::json;

    #[test]
    fn test_schedule_empty() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.total_drive_steps(), 0);
        assert_eq!(serde_json::to_value(&s).expect("serialize"), json!([]));
    }

    #[test]
    fn test_schedule_serialized_shape() {
        let mut s = Schedule::new();
        s.add_carrier(CarrierSchedule::new(
            "car0",
            vec![
                Action::Start { at: Coordinate::new(0, 0) },
                Action::drive(Coordinate::new(1, 0)),
            ],
        ));
        assert_eq!(
            serde_json::to_value(&s).expect("serialize"),
            json!([{
                "carrierId": "car0",
                "actions": [
                    {"type": "start", "x": 0, "y": 0},
                    {"type": "drive", "x": 1, "y": 0}
                ]
            }])
        );
        assert_eq!(s.total_drive_steps(), 1);
        assert!(s.carrier("car1").is_none());
    }
}
