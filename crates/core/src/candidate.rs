// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use angkut_domain::{Coordinate, Fleet, Officer, SubArea};

/// One routine-schedule row loaded for a target weekday.
///
/// The caller resolves every related entity up front (fleet, leader
/// officer, stops with coordinates, region anchor) with explicit queries;
/// the engine never reaches back into the data store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    /// The routine schedule's identifier.
    pub schedule_id: i64,
    /// The fleet executing the route.
    pub fleet: Fleet,
    /// The fleet's leader officer, if one is set.
    pub leader: Option<Officer>,
    /// The route's sub-area stops, in route order.
    pub stops: Vec<SubArea>,
    /// The anchor coordinate of the fleet's region, if any.
    pub region_anchor: Option<Coordinate>,
}

/// An officer/fleet pair structurally eligible for an assignment, with
/// the service-area anchor its proximity is measured from.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The eligible officer.
    pub officer: Officer,
    /// The fleet the officer leads on this schedule.
    pub fleet_id: i64,
    /// The anchor point: stop centroid, or region anchor as fallback.
    pub anchor: Coordinate,
}

/// A candidate with its computed distance from the request location.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// The underlying candidate.
    pub candidate: Candidate,
    /// Great-circle distance from the request location in kilometers.
    pub distance_km: f64,
}
