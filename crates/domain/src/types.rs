// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity types for the collection dispatch domain.
//!
//! All identifiers are database-assigned `i64` rowids. Optional ownership
//! links (fleet → leader officer, officer → region) are plain nullable
//! identifier fields, never hydrated object pointers: lookups are explicit
//! query functions in the persistence layer.

use crate::days_off::DaysOff;
use crate::error::DomainError;
use crate::geo::Coordinate;
use crate::request_status::RequestStatus;
use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A top-level service area ("wilayah", village level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Database identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Administrative sub-district ("kecamatan") name.
    pub sub_district: String,
    /// Proximity reference point; absent when never surveyed.
    pub anchor: Option<Coordinate>,
    /// Whether the region is currently serviced.
    pub is_active: bool,
}

/// A neighborhood-level subdivision of a region ("kampung").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubArea {
    /// Database identifier.
    pub id: i64,
    /// The owning region.
    pub region_id: i64,
    /// Display name.
    pub name: String,
    /// Location of the sub-area, if surveyed.
    pub coordinate: Option<Coordinate>,
    /// Position within a multi-stop route; used for route sequencing only.
    pub route_order: i32,
}

/// Operational status of a collection vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FleetStatus {
    /// In service and schedulable.
    Active,
    /// Temporarily out of service for repair.
    UnderRepair,
    /// Decommissioned or otherwise unavailable.
    Inactive,
}

impl FleetStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "aktif",
            Self::UnderRepair => "perbaikan",
            Self::Inactive => "nonaktif",
        }
    }
}

impl FromStr for FleetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aktif" => Ok(Self::Active),
            "perbaikan" => Ok(Self::UnderRepair),
            "nonaktif" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidFleetStatus(s.to_string())),
        }
    }
}

/// A collection vehicle ("armada").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    /// Database identifier.
    pub id: i64,
    /// Vehicle plate number.
    pub plate_number: String,
    /// Load capacity in kilograms.
    pub capacity_kg: i64,
    /// Operational status.
    pub status: FleetStatus,
    /// The region this vehicle is based in, if any.
    pub region_id: Option<i64>,
    /// The officer currently leading this vehicle's crew, if any.
    pub leader_officer_id: Option<i64>,
}

/// A waste-collection worker ("petugas"), linked to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    /// Database identifier.
    pub id: i64,
    /// The linked user account.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Home region, if any.
    pub region_id: Option<i64>,
    /// Whether the officer is generally available for assignment.
    pub is_available: bool,
    /// Recurring days off.
    pub days_off: DaysOff,
}

impl Officer {
    /// Checks whether the officer can take work on a given weekday.
    ///
    /// An officer is eligible when generally available and the weekday is
    /// not a recorded day off.
    #[must_use]
    pub fn is_eligible_on(&self, day: Weekday) -> bool {
        self.is_available && !self.days_off.contains(day)
    }
}

/// One ordered stop within a routine schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStop {
    /// The sub-area visited.
    pub sub_area_id: i64,
    /// Position of this stop within the route.
    pub route_order: i32,
}

/// A recurring weekday route for one fleet ("jadwal rutin").
///
/// Invariant: a (fleet, weekday) pair is unique — a fleet has at most one
/// schedule per day. Enforced by a unique index at the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineSchedule {
    /// Database identifier.
    pub id: i64,
    /// The fleet executing this route.
    pub fleet_id: i64,
    /// The weekday this route runs.
    pub weekday: Weekday,
    /// The ordered, non-empty list of stops.
    pub stops: Vec<ScheduleStop>,
}

/// A citizen's waste-collection request ("pengajuan").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    /// Database identifier.
    pub id: i64,
    /// The submitting user account; `None` for guest submissions.
    pub user_id: Option<i64>,
    /// Requester name for guest submissions.
    pub guest_name: Option<String>,
    /// Requester phone for guest submissions.
    pub guest_phone: Option<String>,
    /// Requester email for guest submissions.
    pub guest_email: Option<String>,
    /// The region the request falls in, if known.
    pub region_id: Option<i64>,
    /// The sub-area the request falls in, if known.
    pub sub_area_id: Option<i64>,
    /// Free-text street address.
    pub address: String,
    /// Pickup location; absent requests are skipped by the engine.
    pub location: Option<Coordinate>,
    /// Estimated waste volume in kilograms, if given.
    pub estimated_volume_kg: Option<i64>,
    /// Stored photo reference, if uploaded.
    pub photo_path: Option<String>,
    /// Lifecycle status.
    pub status: RequestStatus,
}

/// Status of an assignment ("penugasan").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// The pickup is pending execution.
    Active,
    /// The pickup was carried out.
    Completed,
    /// The assignment was cancelled (e.g., superseded by re-assignment).
    Cancelled,
}

impl AssignmentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "aktif",
            Self::Completed => "selesai",
            Self::Cancelled => "dibatalkan",
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aktif" => Ok(Self::Active),
            "selesai" => Ok(Self::Completed),
            "dibatalkan" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidAssignmentStatus(s.to_string())),
        }
    }
}

/// The binding of a pickup request to an officer and fleet for a scheduled
/// date ("penugasan").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Database identifier.
    pub id: i64,
    /// The request being serviced.
    pub request_id: i64,
    /// The assigned officer.
    pub officer_id: i64,
    /// The assigned vehicle; defaults to the officer's led fleet.
    pub fleet_id: Option<i64>,
    /// Scheduled pickup timestamp.
    pub scheduled_at: NaiveDateTime,
    /// Execution status.
    pub status: AssignmentStatus,
    /// Officer's follow-up note after execution.
    pub note: Option<String>,
    /// Total collected waste in kilograms, recorded at completion.
    pub collected_kg: Option<i64>,
}
