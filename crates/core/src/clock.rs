// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-source abstraction.
//!
//! The orchestrator's "tomorrow" default is derived from an injected
//! clock, never from an ambient global, so tests control the current
//! date deterministically.

use chrono::NaiveDate;

/// A source of the current date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// The wall clock, for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports the given date.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Returns the default scheduling horizon: tomorrow.
#[must_use]
pub fn default_target_date(clock: &dyn Clock) -> NaiveDate {
    let today: NaiveDate = clock.today();
    today.succ_opt().unwrap_or(today)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let clock: FixedClock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn test_default_target_date_is_tomorrow() {
        let clock: FixedClock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert_eq!(
            default_target_date(&clock),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_default_target_date_crosses_month_boundary() {
        let clock: FixedClock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(
            default_target_date(&clock),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }
}
