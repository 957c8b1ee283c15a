// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment planning: the orchestrator's pure half.
//!
//! `plan_assignment` validates preconditions, filters and ranks the
//! candidates, and produces an [`AssignmentPlan`] describing the new
//! assignment row, the request's status transition, and the one history
//! entry the transition must record. The persistence layer commits the
//! plan as a single atomic unit.

use crate::candidate::{RankedCandidate, ScheduleRow};
use crate::eligibility::find_candidates;
use crate::error::CoreError;
use crate::ranking::rank;
use angkut_audit::{Actor, StatusHistoryEntry};
use angkut_domain::{AssignmentStatus, PickupRequest, RequestStatus};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// Hour of day pickups are scheduled at; collection rounds start early.
pub const DEFAULT_PICKUP_HOUR: i64 = 7;

/// The result of a successful planning pass.
///
/// Plans are committed atomically: the assignment row, the request's
/// status change, and the history entry all commit together or not at
/// all. The officer's user id is carried for the post-commit
/// notification.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPlan {
    /// The request being assigned.
    pub request_id: i64,
    /// The selected officer.
    pub officer_id: i64,
    /// The selected officer's user account, for notification.
    pub officer_user_id: i64,
    /// The selected fleet.
    pub fleet_id: i64,
    /// Scheduled pickup timestamp.
    pub scheduled_at: NaiveDateTime,
    /// Status of the new assignment row.
    pub assignment_status: AssignmentStatus,
    /// The request's status before the transition.
    pub previous_status: RequestStatus,
    /// The request's status after the transition.
    pub new_status: RequestStatus,
    /// Distance from the request to the selected anchor, kilometers.
    pub distance_km: f64,
    /// The history entry recording the transition.
    pub history: StatusHistoryEntry,
}

/// Plans an assignment for a pickup request.
///
/// # Arguments
///
/// * `request` - The request to assign
/// * `rows` - Routine-schedule rows for `target_date`'s weekday
/// * `target_date` - The date the pickup would be scheduled for
/// * `actor` - The actor recorded on the history entry
///
/// # Returns
///
/// * `Ok(Some(plan))` with the nearest eligible candidate
/// * `Ok(None)` when the request has no coordinates or no candidate is
///   eligible — a skip, not an error; the request stays in its status
///   for manual assignment
///
/// # Errors
///
/// Returns `CoreError::RequestNotAssignable` if the request's status does
/// not permit assignment. That is a caller bug and fails loudly rather
/// than skipping.
pub fn plan_assignment(
    request: &PickupRequest,
    rows: &[ScheduleRow],
    target_date: NaiveDate,
    actor: &Actor,
) -> Result<Option<AssignmentPlan>, CoreError> {
    if !request.status.is_assignable() {
        return Err(CoreError::RequestNotAssignable {
            request_id: request.id,
            status: request.status,
        });
    }

    let Some(location) = request.location else {
        debug!(
            request_id = request.id,
            "Skipping assignment: request has no coordinates"
        );
        return Ok(None);
    };

    let ranked: Vec<RankedCandidate> = rank(location, find_candidates(target_date, rows));

    let Some(best) = ranked.first() else {
        debug!(
            request_id = request.id,
            %target_date,
            "Skipping assignment: no eligible candidate"
        );
        return Ok(None);
    };

    request
        .status
        .validate_transition(RequestStatus::Scheduled)?;

    let scheduled_at: NaiveDateTime =
        target_date.and_time(NaiveTime::MIN) + Duration::hours(DEFAULT_PICKUP_HOUR);

    let note: String = format!(
        "Penugasan otomatis: petugas {} / armada {}, jarak {:.2} km",
        best.candidate.officer.name, best.candidate.fleet_id, best.distance_km
    );

    let history: StatusHistoryEntry = StatusHistoryEntry::for_request(
        request.id,
        Some(request.status),
        RequestStatus::Scheduled,
        Some(note),
        actor.clone(),
    );

    debug!(
        request_id = request.id,
        officer_id = best.candidate.officer.id,
        fleet_id = best.candidate.fleet_id,
        distance_km = best.distance_km,
        %scheduled_at,
        "Planned assignment"
    );

    Ok(Some(AssignmentPlan {
        request_id: request.id,
        officer_id: best.candidate.officer.id,
        officer_user_id: best.candidate.officer.user_id,
        fleet_id: best.candidate.fleet_id,
        scheduled_at,
        assignment_status: AssignmentStatus::Active,
        previous_status: request.status,
        new_status: RequestStatus::Scheduled,
        distance_km: best.distance_km,
        history,
    }))
}

/// Builds the notification payload for a committed plan.
#[must_use]
pub fn notification_payload(plan: &AssignmentPlan, assignment_id: i64) -> serde_json::Value {
    serde_json::json!({
        "assignment_id": assignment_id,
        "request_id": plan.request_id,
        "fleet_id": plan.fleet_id,
        "scheduled_at": plan.scheduled_at.to_string(),
    })
}
