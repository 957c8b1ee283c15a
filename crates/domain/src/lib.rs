// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod days_off;
mod error;
mod geo;
mod request_status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use days_off::{DaysOff, MAX_DAYS_OFF, iso_number, weekday_from_iso};
pub use error::DomainError;
pub use geo::{Coordinate, EARTH_RADIUS_KM, centroid, distance_km};
pub use request_status::RequestStatus;

// Re-export public entity types
pub use types::{
    Assignment, AssignmentStatus, Fleet, FleetStatus, Officer, PickupRequest, Region,
    RoutineSchedule, ScheduleStop, SubArea,
};
pub use validation::{validate_capacity, validate_schedule_stops};
