// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structural eligibility filtering.
//!
//! Given the routine-schedule rows for a target date's weekday, determine
//! which officer/fleet pairs can take the assignment. Zero candidates is a
//! valid, expected result and never an error.

use crate::candidate::{Candidate, ScheduleRow};
use angkut_domain::{Coordinate, FleetStatus, centroid};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

/// Filters the schedule rows of a target date down to eligible candidates.
///
/// A row survives when:
/// - the fleet status is active,
/// - the fleet has a leader officer,
/// - the leader is available and the target weekday is not a day off,
/// - a usable anchor point exists: the centroid of the stops' coordinates,
///   falling back to the fleet's region anchor.
///
/// Rows with no usable anchor are skipped with a data-quality warning.
///
/// # Arguments
///
/// * `target_date` - The date the pickup would be scheduled for
/// * `rows` - Schedule rows already restricted to the target weekday
#[must_use]
pub fn find_candidates(target_date: NaiveDate, rows: &[ScheduleRow]) -> Vec<Candidate> {
    let weekday: chrono::Weekday = target_date.weekday();
    let mut candidates: Vec<Candidate> = Vec::new();

    for row in rows {
        if row.fleet.status != FleetStatus::Active {
            debug!(
                fleet_id = row.fleet.id,
                status = row.fleet.status.as_str(),
                "Skipping fleet: not active"
            );
            continue;
        }

        let Some(leader) = row.leader.as_ref() else {
            debug!(fleet_id = row.fleet.id, "Skipping fleet: no leader officer");
            continue;
        };

        if !leader.is_eligible_on(weekday) {
            debug!(
                fleet_id = row.fleet.id,
                officer_id = leader.id,
                is_available = leader.is_available,
                "Skipping fleet: leader not eligible on target weekday"
            );
            continue;
        }

        let Some(anchor) = resolve_anchor(row) else {
            warn!(
                schedule_id = row.schedule_id,
                fleet_id = row.fleet.id,
                "Skipping fleet: no stop coordinates and no region anchor"
            );
            continue;
        };

        candidates.push(Candidate {
            officer: leader.clone(),
            fleet_id: row.fleet.id,
            anchor,
        });
    }

    candidates
}

/// Resolves the service-area anchor for a schedule row.
///
/// The centroid of the stops' known coordinates wins; the region anchor
/// is the fallback. `None` means the candidate has no usable location.
fn resolve_anchor(row: &ScheduleRow) -> Option<Coordinate> {
    let stop_coordinates: Vec<Coordinate> =
        row.stops.iter().filter_map(|stop| stop.coordinate).collect();

    centroid(stop_coordinates).or(row.region_anchor)
}
