//! Schedule builder: map + requests in, per-carrier routes out.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::PlannerConfig;
use crate::assembly::RouteAssembler;
use crate::error::{PlanError, PlanResult};
use crate::fleet::partition;
use crate::grid::GridMap;
use crate::models::{CarrierSchedule, DeliveryPlan, RequestSet, Schedule};

/// Runs the planning pipeline: parse the map, annotate requests with their
/// delivery legs, size the fleet, partition, and assemble each route.
///
/// # Examples
///
/// ```
/// use grid_courier::models::DeliveryPlan;
/// use grid_courier::scheduler::{PlannerConfig, ScheduleBuilder};
///
/// let plan = DeliveryPlan::new((1, 1)).with_request((0, 0), (2, 2));
/// let schedule = ScheduleBuilder::new(PlannerConfig::default())
///     .build("   \n H \n   ", &plan)
///     .unwrap();
/// assert_eq!(schedule.num_carriers(), 1);
/// assert_eq!(schedule.carriers()[0].carrier_id, "car0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    config: PlannerConfig,
}

impl ScheduleBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the routes for `plan` on the map described by `map_text`.
    ///
    /// Zero requests produce an empty schedule.
    ///
    /// # Errors
    ///
    /// [`PlanError::MalformedMap`] for a non-rectangular map and
    /// [`PlanError::NoPath`] for an unreachable pickup or dropoff.
    pub fn build(&self, map_text: &str, plan: &DeliveryPlan) -> PlanResult<Schedule> {
        let grid = GridMap::parse(map_text)?;
        debug!(
            width = grid.width(),
            height = grid.height(),
            open = grid.open_cells(),
            "parsed map"
        );
        self.build_on(&grid, plan)
    }

    /// Plans the routes for `plan` on an already parsed grid.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidInput`] if the plan has no headquarters and the
    /// map no `H` marker, [`PlanError::NoPath`] for an unreachable pickup or
    /// dropoff.
    pub fn build_on(&self, grid: &GridMap, plan: &DeliveryPlan) -> PlanResult<Schedule> {
        if plan.requests.is_empty() {
            return Ok(Schedule::new());
        }
        let headquarters = plan.headquarters_on(grid)?;
        let requests = RequestSet::annotate(grid, &plan.requests)?;
        let carriers = self.config.strategy.carrier_count(requests.len());
        debug!(requests = requests.len(), carriers, "sizing fleet");

        let assembler = RouteAssembler::new(grid, headquarters);
        let mut schedule = Schedule::new();
        for group in partition(&requests, carriers) {
            let actions = assembler.assemble(group.requests())?;
            let carrier_id = self.config.carrier_id(group.index());
            debug!(%carrier_id, requests = group.len(), actions = actions.len(), "route assembled");
            schedule.add_carrier(CarrierSchedule::new(carrier_id, actions));
        }
        Ok(schedule)
    }

    /// Plans from loosely typed JSON values.
    ///
    /// The map must be a JSON string and the request document a JSON object
    /// with `deliveryHeadquarter` and `requests`. The document is read into
    /// owned values; `requests` is never modified.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidInput`] for values of the wrong type or shape, and
    /// everything [`build`](Self::build) returns.
    pub fn build_value(&self, map: &Value, requests: &Value) -> PlanResult<Schedule> {
        let map_text = map
            .as_str()
            .ok_or_else(|| PlanError::invalid_input("mapCsv not a string"))?;
        if !requests.is_object() {
            return Err(PlanError::invalid_input("deliveryRequestJson not an object"));
        }
        let plan = DeliveryPlan::deserialize(requests)?;
        self.build(map_text, &plan)
    }
}

/// Plans routes and renders the outcome as JSON.
///
/// Success is the schedule array (`[{"carrierId", "actions"}, ...]`); any
/// failure becomes `{"error": "<message>"}`. Nothing escapes as a panic or
/// an `Err`.
///
/// # Examples
///
/// ```
/// use grid_courier::scheduler::{optimize_delivery, PlannerConfig};
/// use serde_json::json;
///
/// let out = optimize_delivery(&PlannerConfig::default(), &json!(42), &json!({}));
/// assert_eq!(out["error"], "invalid input: mapCsv not a string");
/// ```
pub fn optimize_delivery(config: &PlannerConfig, map: &Value, requests: &Value) -> Value {
    let outcome = ScheduleBuilder::new(config.clone())
        .build_value(map, requests)
        .and_then(|schedule| serde_json::to_value(schedule).map_err(PlanError::from));
    match outcome {
        Ok(value) => value,
        Err(err) => {
            warn!(kind = ?err.kind(), %err, "planning failed");
            json!({ "error": err.to_string() })
        }
    }
}
