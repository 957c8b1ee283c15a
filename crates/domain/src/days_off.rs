// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurring days off for officers.
//!
//! Days off are stored as ISO weekday numbers (1 = Monday .. 7 = Sunday).
//! The domain caps the recorded set at three days; the data layer does not
//! enforce this beyond input validation here.

use crate::error::DomainError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Maximum number of recurring days off an officer may record.
pub const MAX_DAYS_OFF: usize = 3;

/// Converts an ISO weekday number (1 = Monday .. 7 = Sunday) to a weekday.
///
/// # Errors
///
/// Returns `DomainError::InvalidWeekdayNumber` for values outside 1..=7.
pub const fn weekday_from_iso(number: u8) -> Result<Weekday, DomainError> {
    match number {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(DomainError::InvalidWeekdayNumber(number)),
    }
}

/// Returns the ISO weekday number (1 = Monday .. 7 = Sunday) for a weekday.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn iso_number(day: Weekday) -> u8 {
    day.number_from_monday() as u8
}

/// An officer's set of recurring days off.
///
/// Duplicates are collapsed; insertion order is not significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOff(Vec<Weekday>);

impl DaysOff {
    /// Creates an empty set of days off.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a days-off set from a list of weekdays.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TooManyDaysOff` if more than `MAX_DAYS_OFF`
    /// distinct days are given.
    pub fn new(days: Vec<Weekday>) -> Result<Self, DomainError> {
        let mut distinct: Vec<Weekday> = Vec::with_capacity(days.len());
        for day in days {
            if !distinct.contains(&day) {
                distinct.push(day);
            }
        }

        if distinct.len() > MAX_DAYS_OFF {
            return Err(DomainError::TooManyDaysOff {
                count: distinct.len(),
            });
        }

        Ok(Self(distinct))
    }

    /// Creates a days-off set from ISO weekday numbers.
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range numbers or too many distinct days.
    pub fn from_iso_numbers(numbers: &[u8]) -> Result<Self, DomainError> {
        let mut days: Vec<Weekday> = Vec::with_capacity(numbers.len());
        for number in numbers {
            days.push(weekday_from_iso(*number)?);
        }
        Self::new(days)
    }

    /// Returns the ISO weekday numbers for this set, for persistence.
    #[must_use]
    pub fn iso_numbers(&self) -> Vec<u8> {
        self.0.iter().copied().map(iso_number).collect()
    }

    /// Checks whether a weekday is a recorded day off.
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    /// Returns true if no days off are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
