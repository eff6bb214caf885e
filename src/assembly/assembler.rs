//! Route assembler that turns a carrier group into an action sequence.

use tracing::trace;

use crate::error::PlanResult;
use crate::grid::GridMap;
use crate::models::{Action, Coordinate, DeliveryRequest};
use crate::pathfinding::shortest_path;

/// Builds carrier routes from headquarters through each assigned request.
///
/// Requests are served strictly in the given order: drive to the pickup,
/// mark the pickup, follow the precomputed delivery leg, mark the dropoff.
/// Markers sit on the cell the previous action reached; every drive moves
/// exactly one cell.
///
/// # Examples
///
/// ```
/// use grid_courier::assembly::RouteAssembler;
/// use grid_courier::grid::GridMap;
/// use grid_courier::models::{Action, Coordinate, RequestInput, RequestSet};
///
/// let grid = GridMap::open(3, 3);
/// let set = RequestSet::annotate(&grid, &[RequestInput::new((0, 0), (2, 2))]).unwrap();
///
/// let assembler = RouteAssembler::new(&grid, Coordinate::new(1, 1));
/// let actions = assembler.assemble(set.requests()).unwrap();
/// assert_eq!(actions[0], Action::Start { at: Coordinate::new(1, 1) });
/// assert_eq!(actions.last(), Some(&Action::Dropoff { at: Coordinate::new(2, 2), id: 1 }));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteAssembler<'a> {
    grid: &'a GridMap,
    headquarters: Coordinate,
}

impl<'a> RouteAssembler<'a> {
    /// Creates an assembler for routes starting at `headquarters`.
    pub fn new(grid: &'a GridMap, headquarters: Coordinate) -> Self {
        Self { grid, headquarters }
    }

    /// Shared start cell.
    pub fn headquarters(&self) -> Coordinate {
        self.headquarters
    }

    /// Assembles the route serving `requests` in order.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoPath`](crate::error::PlanError::NoPath) if a pickup
    /// cannot be reached from headquarters or from the previous dropoff.
    pub fn assemble(&self, requests: &[DeliveryRequest]) -> PlanResult<Vec<Action>> {
        let mut actions = vec![Action::Start {
            at: self.headquarters,
        }];
        let mut current = self.headquarters;

        for request in requests {
            let approach = shortest_path(self.grid, current, request.pickup())?;
            actions.extend(approach.into_iter().skip(1));

            let leg = request.leg();
            actions.push(Action::Pickup {
                at: request.pickup(),
                id: request.id(),
            });
            actions.extend(leg.iter().skip(1).copied());

            let dropoff = leg.last().map_or(request.dropoff(), Action::coordinate);
            actions.push(Action::Dropoff {
                at: dropoff,
                id: request.id(),
            });
            trace!(id = request.id(), actions = actions.len(), "request served");
            current = dropoff;
        }

        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{RequestInput, RequestSet};

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_single_request_route() {
        let grid = GridMap::open(3, 3);
        let set = RequestSet::annotate(&grid, &[RequestInput::new((0, 0), (2, 2))]).expect("ok");
        let actions = RouteAssembler::new(&grid, c(1, 1))
            .assemble(set.requests())
            .expect("route");
        assert_eq!(
            actions,
            vec![
                Action::Start { at: c(1, 1) },
                Action::drive(c(1, 0)),
                Action::drive(c(0, 0)),
                Action::Pickup { at: c(0, 0), id: 1 },
                Action::drive(c(0, 1)),
                Action::drive(c(0, 2)),
                Action::drive(c(1, 2)),
                Action::drive(c(2, 2)),
                Action::Dropoff { at: c(2, 2), id: 1 },
            ]
        );
    }

    #[test]
    fn test_pickup_at_headquarters() {
        let grid = GridMap::open(3, 1);
        let set = RequestSet::annotate(&grid, &[RequestInput::new((0, 0), (2, 0))]).expect("ok");
        let actions = RouteAssembler::new(&grid, c(0, 0))
            .assemble(set.requests())
            .expect("route");
        assert_eq!(
            actions,
            vec![
                Action::Start { at: c(0, 0) },
                Action::Pickup { at: c(0, 0), id: 1 },
                Action::drive(c(1, 0)),
                Action::drive(c(2, 0)),
                Action::Dropoff { at: c(2, 0), id: 1 },
            ]
        );
    }

    #[test]
    fn test_chained_requests_in_order() {
        let grid = GridMap::open(4, 1);
        let inputs = [RequestInput::new((1, 0), (2, 0)), RequestInput::new((2, 0), (0, 0))];
        let set = RequestSet::annotate(&grid, &inputs).expect("ok");
        let actions = RouteAssembler::new(&grid, c(0, 0))
            .assemble(set.requests())
            .expect("route");
        let markers: Vec<(bool, usize)> = actions
            .iter()
            .filter_map(|a| match *a {
                Action::Pickup { id, .. } => Some((true, id)),
                Action::Dropoff { id, .. } => Some((false, id)),
                _ => None,
            })
            .collect();
        assert_eq!(markers, vec![(true, 1), (false, 1), (true, 2), (false, 2)]);
        // Second pickup is where the first dropoff happened: no drive between.
        let first_dropoff = actions
            .iter()
            .position(|a| matches!(a, Action::Dropoff { id: 1, .. }))
            .expect("dropoff");
        assert_eq!(actions[first_dropoff + 1], Action::Pickup { at: c(2, 0), id: 2 });
    }

    #[test]
    fn test_unreachable_pickup_from_headquarters() {
        let grid = GridMap::parse("  #  ").expect("valid");
        let set = RequestSet::annotate(&grid, &[RequestInput::new((3, 0), (4, 0))]).expect("ok");
        let err = RouteAssembler::new(&grid, c(0, 0))
            .assemble(set.requests())
            .expect_err("walled");
        assert_eq!(err.kind(), ErrorKind::NoPath);
    }

    #[test]
    fn test_no_requests() {
        let grid = GridMap::open(1, 1);
        let actions = RouteAssembler::new(&grid, c(0, 0)).assemble(&[]).expect("route");
        assert_eq!(actions, vec![Action::Start { at: c(0, 0) }]);
    }
}
