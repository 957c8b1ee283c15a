// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Latitude outside the valid [-90, 90] range.
    InvalidLatitude(f64),
    /// Longitude outside the valid [-180, 180] range.
    InvalidLongitude(f64),
    /// An officer may record at most `MAX_DAYS_OFF` recurring days off.
    TooManyDaysOff {
        /// The number of days off that was submitted.
        count: usize,
    },
    /// ISO weekday numbers run from 1 (Monday) to 7 (Sunday).
    InvalidWeekdayNumber(u8),
    /// Pickup request status string is not a valid status.
    InvalidRequestStatus(String),
    /// Assignment status string is not a valid status.
    InvalidAssignmentStatus(String),
    /// Fleet status string is not a valid status.
    InvalidFleetStatus(String),
    /// Status-history reference type string is not valid.
    InvalidRefType(String),
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The status transitioned from.
        from: String,
        /// The status transitioned to.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// A routine schedule must visit at least one sub-area.
    EmptyScheduleStops,
    /// Fleet capacity must be a positive number of kilograms.
    InvalidCapacity(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(lat) => {
                write!(f, "Invalid latitude {lat}: must be between -90 and 90")
            }
            Self::InvalidLongitude(lon) => {
                write!(f, "Invalid longitude {lon}: must be between -180 and 180")
            }
            Self::TooManyDaysOff { count } => {
                write!(
                    f,
                    "Too many days off: {count}. At most {} recurring days off may be recorded",
                    crate::days_off::MAX_DAYS_OFF
                )
            }
            Self::InvalidWeekdayNumber(n) => {
                write!(
                    f,
                    "Invalid weekday number {n}: must be 1 (Monday) through 7 (Sunday)"
                )
            }
            Self::InvalidRequestStatus(s) => write!(f, "Invalid request status: '{s}'"),
            Self::InvalidAssignmentStatus(s) => write!(f, "Invalid assignment status: '{s}'"),
            Self::InvalidFleetStatus(s) => write!(f, "Invalid fleet status: '{s}'"),
            Self::InvalidRefType(s) => write!(f, "Invalid reference type: '{s}'"),
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition {from} -> {to}: {reason}")
            }
            Self::EmptyScheduleStops => {
                write!(f, "A routine schedule must include at least one sub-area stop")
            }
            Self::InvalidCapacity(kg) => {
                write!(f, "Invalid fleet capacity {kg} kg: must be positive")
            }
        }
    }
}

impl std::error::Error for DomainError {}
