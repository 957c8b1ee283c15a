// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{coord, make_fleet, make_officer, make_request, make_row, make_stop, monday};
use crate::candidate::ScheduleRow;
use crate::error::CoreError;
use crate::plan::{AssignmentPlan, plan_assignment};
use angkut_audit::{Actor, RefType};
use angkut_domain::{AssignmentStatus, FleetStatus, RequestStatus};
use chrono::Timelike;

fn one_eligible_row() -> Vec<ScheduleRow> {
    vec![make_row(
        1,
        make_fleet(1, FleetStatus::Active, Some(1)),
        Some(make_officer(1, true, &[])),
        vec![make_stop(1, Some(coord(-7.35, 108.11)))],
        None,
    )]
}

#[test]
fn test_submitted_request_near_route_is_assigned() {
    let request = make_request(7, RequestStatus::Submitted, Some(coord(-7.34, 108.11)));

    let plan: AssignmentPlan =
        plan_assignment(&request, &one_eligible_row(), monday(), &Actor::system())
            .unwrap()
            .unwrap();

    assert_eq!(plan.request_id, 7);
    assert_eq!(plan.officer_id, 1);
    assert_eq!(plan.officer_user_id, 101);
    assert_eq!(plan.fleet_id, 1);
    assert_eq!(plan.assignment_status, AssignmentStatus::Active);
    assert_eq!(plan.previous_status, RequestStatus::Submitted);
    assert_eq!(plan.new_status, RequestStatus::Scheduled);
    assert!(plan.distance_km > 1.0 && plan.distance_km < 1.2);
}

#[test]
fn test_scheduled_at_is_target_date_at_default_hour() {
    let request = make_request(7, RequestStatus::Verified, Some(coord(-7.34, 108.11)));

    let plan: AssignmentPlan =
        plan_assignment(&request, &one_eligible_row(), monday(), &Actor::system())
            .unwrap()
            .unwrap();

    assert_eq!(plan.scheduled_at.date(), monday());
    assert_eq!(plan.scheduled_at.time().hour(), 7);
    assert_eq!(plan.scheduled_at.time().minute(), 0);
}

#[test]
fn test_missing_coordinates_is_a_skip_not_an_error() {
    let request = make_request(7, RequestStatus::Submitted, None);

    let result = plan_assignment(&request, &one_eligible_row(), monday(), &Actor::system());

    assert_eq!(result, Ok(None));
}

#[test]
fn test_zero_candidates_is_a_skip() {
    let request = make_request(7, RequestStatus::Submitted, Some(coord(-7.34, 108.11)));

    let result = plan_assignment(&request, &[], monday(), &Actor::system());

    assert_eq!(result, Ok(None));
}

#[test]
fn test_day_off_leaves_zero_candidates() {
    // Monday (ISO 1) is the leader's day off; target date is a Monday.
    let rows: Vec<ScheduleRow> = vec![make_row(
        1,
        make_fleet(1, FleetStatus::Active, Some(1)),
        Some(make_officer(1, true, &[1])),
        vec![make_stop(1, Some(coord(-7.35, 108.11)))],
        None,
    )];
    let request = make_request(7, RequestStatus::Submitted, Some(coord(-7.34, 108.11)));

    let result = plan_assignment(&request, &rows, monday(), &Actor::system());

    assert_eq!(result, Ok(None));
}

#[test]
fn test_non_assignable_status_fails_loudly() {
    for status in [
        RequestStatus::Scheduled,
        RequestStatus::Collected,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ] {
        let request = make_request(7, status, Some(coord(-7.34, 108.11)));
        let result = plan_assignment(&request, &one_eligible_row(), monday(), &Actor::system());
        assert_eq!(
            result,
            Err(CoreError::RequestNotAssignable {
                request_id: 7,
                status,
            })
        );
    }
}

#[test]
fn test_nearest_of_two_fleets_is_selected() {
    // Anchors roughly 5 km and 1 km from the request.
    let rows: Vec<ScheduleRow> = vec![
        make_row(
            1,
            make_fleet(1, FleetStatus::Active, Some(1)),
            Some(make_officer(1, true, &[])),
            vec![make_stop(1, Some(coord(-7.385, 108.11)))],
            None,
        ),
        make_row(
            2,
            make_fleet(2, FleetStatus::Active, Some(2)),
            Some(make_officer(2, true, &[])),
            vec![make_stop(2, Some(coord(-7.349, 108.11)))],
            None,
        ),
    ];
    let request = make_request(7, RequestStatus::Submitted, Some(coord(-7.34, 108.11)));

    let plan: AssignmentPlan = plan_assignment(&request, &rows, monday(), &Actor::system())
        .unwrap()
        .unwrap();

    assert_eq!(plan.officer_id, 2);
    assert_eq!(plan.fleet_id, 2);
}

#[test]
fn test_history_entry_records_the_transition() {
    let request = make_request(7, RequestStatus::Verified, Some(coord(-7.34, 108.11)));

    let plan: AssignmentPlan =
        plan_assignment(&request, &one_eligible_row(), monday(), &Actor::system())
            .unwrap()
            .unwrap();

    assert_eq!(plan.history.ref_type, RefType::Request);
    assert_eq!(plan.history.ref_id, 7);
    assert_eq!(plan.history.previous_status.as_deref(), Some("diverifikasi"));
    assert_eq!(plan.history.new_status, "dijadwalkan");
    assert_eq!(plan.history.actor, Actor::system());

    let note: String = plan.history.note.unwrap();
    assert!(note.contains("Petugas 1"));
    assert!(note.contains("armada 1"));
}

#[test]
fn test_notification_payload_names_the_assignment() {
    let request = make_request(7, RequestStatus::Submitted, Some(coord(-7.34, 108.11)));
    let plan: AssignmentPlan =
        plan_assignment(&request, &one_eligible_row(), monday(), &Actor::system())
            .unwrap()
            .unwrap();

    let payload = crate::plan::notification_payload(&plan, 55);

    assert_eq!(payload["assignment_id"], 55);
    assert_eq!(payload["request_id"], 7);
    assert_eq!(payload["fleet_id"], 1);
}
