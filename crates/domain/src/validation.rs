// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules shared by the write paths.

use crate::error::DomainError;
use crate::types::ScheduleStop;

/// Validates that a routine schedule visits at least one sub-area.
///
/// # Errors
///
/// Returns `DomainError::EmptyScheduleStops` for an empty stop list.
pub const fn validate_schedule_stops(stops: &[ScheduleStop]) -> Result<(), DomainError> {
    if stops.is_empty() {
        return Err(DomainError::EmptyScheduleStops);
    }
    Ok(())
}

/// Validates a fleet's load capacity.
///
/// # Errors
///
/// Returns `DomainError::InvalidCapacity` for zero or negative values.
pub const fn validate_capacity(capacity_kg: i64) -> Result<(), DomainError> {
    if capacity_kg <= 0 {
        return Err(DomainError::InvalidCapacity(capacity_kg));
    }
    Ok(())
}
