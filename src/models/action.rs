//! Carrier actions.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Identifier of a delivery request: its 1-based position in the
/// submitted request list.
pub type RequestId = usize;

/// One step of a carrier's route.
///
/// Serialized with an internal `type` tag and the coordinate flattened in:
/// `{"type": "pickup", "x": 0, "y": 0, "id": 1}`.
///
/// # Examples
///
/// ```
/// use grid_courier::models::{Action, Coordinate};
///
/// let a = Action::Pickup { at: Coordinate::new(2, 3), id: 7 };
/// assert_eq!(a.coordinate(), Coordinate::new(2, 3));
/// assert_eq!(a.request_id(), Some(7));
/// assert!(a.is_marker());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Initial position of the carrier; no movement.
    Start {
        #[serde(flatten)]
        at: Coordinate,
    },
    /// A single-cell move onto `at`.
    Drive {
        #[serde(flatten)]
        at: Coordinate,
    },
    /// Goods for request `id` are loaded at `at`.
    Pickup {
        #[serde(flatten)]
        at: Coordinate,
        id: RequestId,
    },
    /// Goods for request `id` are unloaded at `at`.
    Dropoff {
        #[serde(flatten)]
        at: Coordinate,
        id: RequestId,
    },
}

impl Action {
    /// Shorthand for a drive step.
    pub const fn drive(at: Coordinate) -> Self {
        Self::Drive { at }
    }

    /// Cell where this action happens.
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            Self::Start { at } | Self::Drive { at } => at,
            Self::Pickup { at, .. } | Self::Dropoff { at, .. } => at,
        }
    }

    /// Request carried by a pickup/dropoff marker.
    pub fn request_id(&self) -> Option<RequestId> {
        match *self {
            Self::Pickup { id, .. } | Self::Dropoff { id, .. } => Some(id),
            Self::Start { .. } | Self::Drive { .. } => None,
        }
    }

    /// Returns `true` for pickup/dropoff markers, which do not move the carrier.
    pub fn is_marker(&self) -> bool {
        self.request_id().is_some()
    }

    /// Returns `true` for drive steps.
    pub fn is_drive(&self) -> bool {
        matches!(self, Self::Drive { .. })
    }
}
