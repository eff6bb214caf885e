//! Schedule auditing.
//!
//! Re-checks an assembled schedule against the route rules and summarizes
//! each carrier's work.

mod checker;

pub use checker::{audit_route, audit_schedule, AuditReport, CarrierSummary, Violation};
