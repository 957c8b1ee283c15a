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

//! The automatic assignment engine.
//!
//! Matches an incoming pickup request to an available officer/fleet pair
//! based on geographic proximity, day-of-week routing schedules, and
//! officer availability. The engine is pure: callers load the schedule
//! rows for the target weekday, the engine filters and ranks them and
//! returns an [`AssignmentPlan`]; the persistence layer commits the plan
//! atomically.

mod candidate;
mod clock;
mod eligibility;
mod error;
mod notify;
mod plan;
mod ranking;

#[cfg(test)]
mod tests;

pub use candidate::{Candidate, RankedCandidate, ScheduleRow};
pub use clock::{Clock, FixedClock, SystemClock, default_target_date};
pub use eligibility::find_candidates;
pub use error::CoreError;
pub use notify::{NotificationKind, Notifier, NotifyError, NullNotifier};
pub use plan::{AssignmentPlan, DEFAULT_PICKUP_HOUR, notification_payload, plan_assignment};
pub use ranking::{DISTANCE_TIE_TOLERANCE_KM, rank};
