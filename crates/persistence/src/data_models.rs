// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Insert-side data models and row projections.
//!
//! `New*` structs carry the column values for a fresh row; the database
//! assigns the id. Read-side queries decode straight into the domain
//! types.

use angkut_domain::{Coordinate, DaysOff, FleetStatus, RequestStatus, ScheduleStop};
use chrono::Weekday;

/// Column values for a new service area.
#[derive(Debug, Clone)]
pub struct NewRegion {
    pub name: String,
    pub sub_district: String,
    pub anchor: Option<Coordinate>,
    pub is_active: bool,
}

/// Column values for a new sub-area within a region.
#[derive(Debug, Clone)]
pub struct NewSubArea {
    pub region_id: i64,
    pub name: String,
    pub coordinate: Option<Coordinate>,
    pub route_order: i32,
}

/// Column values for a new officer.
#[derive(Debug, Clone)]
pub struct NewOfficer {
    pub user_id: i64,
    pub name: String,
    pub region_id: Option<i64>,
    pub is_available: bool,
    pub days_off: DaysOff,
}

/// Column values for a new fleet vehicle.
#[derive(Debug, Clone)]
pub struct NewFleet {
    pub plate_number: String,
    pub capacity_kg: i64,
    pub status: FleetStatus,
    pub region_id: Option<i64>,
    pub leader_officer_id: Option<i64>,
}

/// Column values for a new routine schedule with its ordered stops.
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub fleet_id: i64,
    pub weekday: Weekday,
    pub stops: Vec<ScheduleStop>,
}

/// Column values for a new pickup request.
#[derive(Debug, Clone)]
pub struct NewRequest {
    pub user_id: Option<i64>,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub region_id: Option<i64>,
    pub sub_area_id: Option<i64>,
    pub address: String,
    pub location: Option<Coordinate>,
    pub estimated_volume_kg: Option<i64>,
    pub photo_path: Option<String>,
    pub status: RequestStatus,
}

/// A stored status-history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusHistoryRecord {
    pub id: i64,
    pub ref_type: String,
    pub ref_id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    pub note: Option<String>,
    pub actor_user_id: Option<i64>,
    pub actor_type: String,
    pub created_at: String,
}
