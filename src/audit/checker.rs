//! Route rule checking and per-carrier summaries.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::models::{Action, CarrierSchedule, Coordinate, RequestId, Schedule};

/// A broken route rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum Violation {
    /// The route does not begin with a start action.
    MissingStart {
        /// Carrier route.
        carrier_id: String,
    },
    /// A start action appears after the first position.
    UnexpectedStart {
        /// Carrier route.
        carrier_id: String,
        /// Index in the action list.
        position: usize,
    },
    /// A drive does not move exactly one cell, or a marker is not on the
    /// cell the carrier is standing on.
    DisjointStep {
        /// Carrier route.
        carrier_id: String,
        /// Index in the action list.
        position: usize,
        /// Cell before the action.
        from: Coordinate,
        /// Cell of the action.
        to: Coordinate,
    },
    /// A request is picked up or dropped off twice.
    DuplicateMarker {
        /// Carrier route.
        carrier_id: String,
        /// Affected request.
        request_id: RequestId,
    },
    /// A dropoff occurs with no earlier pickup.
    DropoffBeforePickup {
        /// Carrier route.
        carrier_id: String,
        /// Affected request.
        request_id: RequestId,
    },
    /// A picked-up request is never dropped off.
    MissingDropoff {
        /// Carrier route.
        carrier_id: String,
        /// Affected request.
        request_id: RequestId,
    },
    /// A marker of `other` falls between the pickup and dropoff of `open`.
    InterleavedRequests {
        /// Carrier route.
        carrier_id: String,
        /// Request currently on board.
        open: RequestId,
        /// Request whose marker intervened.
        other: RequestId,
    },
    /// A request appears in more than one carrier route.
    DuplicateAssignment {
        /// Affected request.
        request_id: RequestId,
        /// Carriers that serve it.
        carrier_ids: Vec<String>,
    },
}

/// Work done by one carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierSummary {
    /// Carrier route.
    pub carrier_id: String,
    /// Cells moved.
    pub drive_steps: usize,
    /// Requests delivered, in delivery order.
    pub delivered: Vec<RequestId>,
}

/// Outcome of [`audit_schedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Broken rules, grouped by carrier in schedule order.
    pub violations: Vec<Violation>,
    /// One entry per carrier.
    pub summaries: Vec<CarrierSummary>,
}

impl AuditReport {
    /// Returns `true` if no rule is broken.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Total cells moved by the fleet.
    pub fn total_drive_steps(&self) -> usize {
        self.summaries.iter().map(|s| s.drive_steps).sum()
    }

    /// Total requests delivered by the fleet.
    pub fn total_delivered(&self) -> usize {
        self.summaries.iter().map(|s| s.delivered.len()).sum()
    }
}

/// Checks one carrier route.
///
/// Rules: the first action is the only start; every drive moves one cell;
/// markers stay on the current cell; each request has one pickup followed
/// by one dropoff with no other request's marker in between.
pub fn audit_route(carrier: &CarrierSchedule) -> Vec<Violation> {
    let carrier_id = &carrier.carrier_id;
    let mut violations = Vec::new();

    match carrier.actions.first() {
        Some(Action::Start { .. }) => {}
        _ => violations.push(Violation::MissingStart {
            carrier_id: carrier_id.clone(),
        }),
    }

    let mut picked = BTreeSet::new();
    let mut dropped = BTreeSet::new();
    let mut on_board: Option<RequestId> = None;

    for (position, window) in carrier.actions.windows(2).enumerate() {
        let position = position + 1;
        let (from, to) = (window[0].coordinate(), window[1].coordinate());
        let step_ok = match window[1] {
            Action::Start { .. } => {
                violations.push(Violation::UnexpectedStart {
                    carrier_id: carrier_id.clone(),
                    position,
                });
                true
            }
            Action::Drive { .. } => from.is_adjacent(to),
            Action::Pickup { .. } | Action::Dropoff { .. } => from == to,
        };
        if !step_ok {
            violations.push(Violation::DisjointStep {
                carrier_id: carrier_id.clone(),
                position,
                from,
                to,
            });
        }
    }

    for action in &carrier.actions {
        match *action {
            Action::Pickup { id, .. } => {
                if !picked.insert(id) {
                    violations.push(Violation::DuplicateMarker {
                        carrier_id: carrier_id.clone(),
                        request_id: id,
                    });
                    continue;
                }
                if let Some(open) = on_board {
                    violations.push(Violation::InterleavedRequests {
                        carrier_id: carrier_id.clone(),
                        open,
                        other: id,
                    });
                }
                on_board = Some(id);
            }
            Action::Dropoff { id, .. } => {
                if !picked.contains(&id) {
                    violations.push(Violation::DropoffBeforePickup {
                        carrier_id: carrier_id.clone(),
                        request_id: id,
                    });
                    continue;
                }
                if !dropped.insert(id) {
                    violations.push(Violation::DuplicateMarker {
                        carrier_id: carrier_id.clone(),
                        request_id: id,
                    });
                    continue;
                }
                match on_board {
                    Some(open) if open == id => on_board = None,
                    Some(open) => violations.push(Violation::InterleavedRequests {
                        carrier_id: carrier_id.clone(),
                        open,
                        other: id,
                    }),
                    None => {}
                }
            }
            Action::Start { .. } | Action::Drive { .. } => {}
        }
    }

    violations.extend(picked.difference(&dropped).map(|&id| Violation::MissingDropoff {
        carrier_id: carrier_id.clone(),
        request_id: id,
    }));

    violations
}

/// Checks every route of a schedule, plus that no request is served by two
/// carriers, and summarizes each carrier.
///
/// # Examples
///
/// ```
/// use grid_courier::audit::audit_schedule;
/// use grid_courier::models::DeliveryPlan;
/// use grid_courier::scheduler::ScheduleBuilder;
///
/// let plan = DeliveryPlan::new((0, 0)).with_request((2, 0), (0, 1));
/// let schedule = ScheduleBuilder::default().build("   \n   ", &plan).unwrap();
/// let report = audit_schedule(&schedule);
/// assert!(report.is_valid());
/// assert_eq!(report.total_delivered(), 1);
/// assert_eq!(report.total_drive_steps(), 5);
/// ```
pub fn audit_schedule(schedule: &Schedule) -> AuditReport {
    let mut report = AuditReport::default();
    let mut served_by: HashMap<RequestId, Vec<String>> = HashMap::new();

    for carrier in schedule.carriers() {
        report.violations.extend(audit_route(carrier));

        let mut delivered = Vec::new();
        for action in &carrier.actions {
            if let Action::Dropoff { id, .. } = *action {
                delivered.push(id);
            }
            if let Action::Pickup { id, .. } = *action {
                let carriers = served_by.entry(id).or_default();
                if !carriers.contains(&carrier.carrier_id) {
                    carriers.push(carrier.carrier_id.clone());
                }
            }
        }
        report.summaries.push(CarrierSummary {
            carrier_id: carrier.carrier_id.clone(),
            drive_steps: carrier.drive_steps(),
            delivered,
        });
    }

    let mut shared: Vec<(RequestId, Vec<String>)> = served_by
        .into_iter()
        .filter(|(_, carriers)| carriers.len() > 1)
        .collect();
    shared.sort_by_key(|(id, _)| *id);
    report.violations.extend(
        shared
            .into_iter()
            .map(|(request_id, carrier_ids)| Violation::DuplicateAssignment {
                request_id,
                carrier_ids,
            }),
    );

    report
}
