//! Delivery requests and their annotation with delivery legs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Action, Coordinate, RequestId};
use crate::error::{PlanError, PlanResult};
use crate::grid::GridMap;
use crate::pathfinding::shortest_path;

/// A submitted pickup/dropoff pair, as it appears in the request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInput {
    /// Cell where the goods are collected.
    pub pickup: Coordinate,
    /// Cell where the goods are delivered.
    pub dropoff: Coordinate,
}

impl RequestInput {
    /// Creates a request input.
    pub fn new(pickup: impl Into<Coordinate>, dropoff: impl Into<Coordinate>) -> Self {
        Self {
            pickup: pickup.into(),
            dropoff: dropoff.into(),
        }
    }
}

/// The request document: a shared headquarters and the requests in
/// submission order.
///
/// # Examples
///
/// ```
/// use grid_courier::models::{Coordinate, DeliveryPlan};
///
/// let plan: DeliveryPlan = serde_json::from_str(r#"{
///     "deliveryHeadquarter": {"x": 1, "y": 1},
///     "requests": [{"pickup": {"x": 0, "y": 0}, "dropoff": {"x": 2, "y": 2}}]
/// }"#).unwrap();
/// assert_eq!(plan.headquarters, Some(Coordinate::new(1, 1)));
/// assert_eq!(plan.requests.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// Start cell of every carrier. When absent, the first `H` marker of
    /// the map is used.
    #[serde(
        rename = "deliveryHeadquarter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub headquarters: Option<Coordinate>,
    /// Requests in submission order.
    #[serde(default)]
    pub requests: Vec<RequestInput>,
}

impl DeliveryPlan {
    /// Creates an empty plan for the given headquarters.
    pub fn new(headquarters: impl Into<Coordinate>) -> Self {
        Self {
            headquarters: Some(headquarters.into()),
            requests: Vec::new(),
        }
    }

    /// Start cell on `grid`: the explicit headquarters, else the first `H`
    /// marker in reading order.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidInput`] if neither is available.
    pub fn headquarters_on(&self, grid: &GridMap) -> PlanResult<Coordinate> {
        self.headquarters
            .or_else(|| grid.headquarters_markers().first().copied())
            .ok_or_else(|| {
                PlanError::invalid_input("no deliveryHeadquarter given and no H marker on the map")
            })
    }

    /// Appends a request.
    pub fn with_request(mut self, pickup: impl Into<Coordinate>, dropoff: impl Into<Coordinate>) -> Self {
        self.requests.push(RequestInput::new(pickup, dropoff));
        self
    }
}

/// A request annotated with its identifier and delivery leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    id: RequestId,
    pickup: Coordinate,
    dropoff: Coordinate,
    leg: Vec<Action>,
}

impl DeliveryRequest {
    /// Annotates one input. `id` is its 1-based submission position.
    pub fn annotate(grid: &GridMap, id: RequestId, input: &RequestInput) -> PlanResult<Self> {
        let leg = shortest_path(grid, input.pickup, input.dropoff)?;
        Ok(Self {
            id,
            pickup: input.pickup,
            dropoff: input.dropoff,
            leg,
        })
    }

    /// Position in the submitted list, starting at 1.
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Pickup cell.
    pub fn pickup(&self) -> Coordinate {
        self.pickup
    }

    /// Dropoff cell.
    pub fn dropoff(&self) -> Coordinate {
        self.dropoff
    }

    /// Drive actions from pickup to dropoff, both inclusive.
    pub fn leg(&self) -> &[Action] {
        &self.leg
    }
}

/// All requests of one planning run, annotated, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSet {
    requests: Vec<DeliveryRequest>,
}

impl RequestSet {
    /// Computes the delivery leg of every input and numbers them from 1.
    ///
    /// The inputs are only read; new records are returned.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoPath`](crate::error::PlanError::NoPath) if a pickup
    /// cannot reach its dropoff.
    pub fn annotate(grid: &GridMap, inputs: &[RequestInput]) -> PlanResult<Self> {
        #[cfg(feature = "parallel")]
        let requests = {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .enumerate()
                .map(|(i, input)| DeliveryRequest::annotate(grid, i + 1, input))
                .collect::<PlanResult<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let requests = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| DeliveryRequest::annotate(grid, i + 1, input))
            .collect::<PlanResult<Vec<_>>>()?;

        debug!(requests = requests.len(), "annotated delivery legs");
        Ok(Self { requests })
    }

    /// Requests in submission order.
    pub fn requests(&self) -> &[DeliveryRequest] {
        &self.requests
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if there are no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_annotate_ids_and_legs() {
        let grid = GridMap::open(4, 4);
        let inputs = vec![RequestInput::new((0, 0), (0, 2)), RequestInput::new((3, 3), (3, 3))];
        let set = RequestSet::annotate(&grid, &inputs).expect("reachable");
        assert_eq!(set.len(), 2);

        let first = &set.requests()[0];
        assert_eq!(first.id(), 1);
        assert_eq!(first.leg().len(), 3);
        assert_eq!(first.leg()[0].coordinate(), first.pickup());
        assert_eq!(first.leg()[2].coordinate(), first.dropoff());

        let second = &set.requests()[1];
        assert_eq!(second.id(), 2);
        assert_eq!(second.leg(), &[Action::drive(Coordinate::new(3, 3))]);
    }

    #[test]
    fn test_annotate_unreachable() {
        let grid = GridMap::parse("  #  ").expect("valid");
        let inputs = vec![RequestInput::new((0, 0), (1, 0)), RequestInput::new((0, 0), (4, 0))];
        let err = RequestSet::annotate(&grid, &inputs).expect_err("walled");
        assert_eq!(err.kind(), ErrorKind::NoPath);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_annotate_matches_sequential() {
        let grid = GridMap::parse("      \n #### \n      \n ## # \n      ").expect("valid");
        let inputs: Vec<RequestInput> = (0..24)
            .map(|i| RequestInput::new((i % 6, 0), ((i * 5) % 6, 4)))
            .collect();
        let sequential: Vec<DeliveryRequest> = inputs
            .iter()
            .enumerate()
            .map(|(i, input)| DeliveryRequest::annotate(&grid, i + 1, input))
            .collect::<PlanResult<_>>()
            .expect("reachable");
        let parallel = RequestSet::annotate(&grid, &inputs).expect("reachable");
        assert_eq!(parallel.requests(), sequential.as_slice());
    }

    #[test]
    fn test_annotate_empty() {
        let set = RequestSet::annotate(&GridMap::open(1, 1), &[]).expect("empty");
        assert!(set.is_empty());
    }

    #[test]
    fn test_plan_builder() {
        let plan = DeliveryPlan::new((1, 1)).with_request((0, 0), (2, 2));
        assert_eq!(plan.requests, vec![RequestInput::new((0, 0), (2, 2))]);
    }

    #[test]
    fn test_headquarters_falls_back_to_map_marker() {
        let grid = GridMap::parse("#  \n  H\n H ").expect("valid");
        let plan: DeliveryPlan = serde_json::from_str(r#"{"requests": []}"#).expect("valid");
        assert_eq!(plan.headquarters, None);
        assert_eq!(plan.headquarters_on(&grid).expect("marker"), Coordinate::new(2, 1));

        let explicit = DeliveryPlan::new((0, 2));
        assert_eq!(explicit.headquarters_on(&grid).expect("given"), Coordinate::new(0, 2));
    }

    #[test]
    fn test_headquarters_missing_everywhere() {
        let err = DeliveryPlan::default()
            .headquarters_on(&GridMap::open(2, 2))
            .expect_err("none");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_plan_missing_requests_field() {
        let plan: DeliveryPlan =
            serde_json::from_str(r#"{"deliveryHeadquarter": {"x": 0, "y": 0}}"#).expect("valid");
        assert!(plan.requests.is_empty());
    }
}
