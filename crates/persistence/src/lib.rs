// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence layer for the Angkut assignment engine.
//!
//! This crate stores the canonical domain entities, pickup requests,
//! assignments, and the append-only status history. The `Persistence`
//! adapter glues the pure engine to the database: `auto_assign` loads a
//! request and the schedule rows for the target weekday, asks the
//! engine for a plan, commits the plan in one transaction, and fires
//! the officer notification after the commit.
//!
//! In-memory databases are used for tests; each call to
//! `new_in_memory()` receives a unique database name via an atomic
//! counter, so tests are isolated without time-based collisions.

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
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use angkut::{
    AssignmentPlan, Clock, NotificationKind, Notifier, ScheduleRow, default_target_date,
    notification_payload, plan_assignment,
};
use angkut_audit::{Actor, RefType, StatusHistoryEntry};
use angkut_domain::{Assignment, AssignmentStatus, PickupRequest, RequestStatus};
use chrono::{Datelike, NaiveDate, Weekday};
use rusqlite::{Connection, OpenFlags, Transaction, params};
use tracing::{info, warn};

mod data_models;
mod error;
mod mutations;
mod queries;
mod schema;

#[cfg(test)]
mod tests;

pub use data_models::{
    NewFleet, NewOfficer, NewRegion, NewRequest, NewSchedule, NewSubArea, StatusHistoryRecord,
};
pub use error::PersistenceError;
pub use schema::initialize_schema;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// concurrently running tests never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter owning the database connection.
pub struct Persistence {
    conn: Connection,
}

impl Persistence {
    /// Creates a persistence adapter backed by an in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let uri: String = format!("file:angkut_mem_{db_id}?mode=memory&cache=shared");

        let conn: Connection = Connection::open_with_flags(
            uri,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI,
        )?;
        schema::initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Opens (and initializes, if new) a database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path)?;
        schema::initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Inserts a service area, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_region(&self, region: &NewRegion) -> Result<i64, PersistenceError> {
        mutations::insert_region(&self.conn, region)
    }

    /// Inserts a sub-area, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_sub_area(&self, sub_area: &NewSubArea) -> Result<i64, PersistenceError> {
        mutations::insert_sub_area(&self.conn, sub_area)
    }

    /// Inserts an officer, returning their id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_officer(&self, officer: &NewOfficer) -> Result<i64, PersistenceError> {
        mutations::insert_officer(&self.conn, officer)
    }

    /// Inserts a fleet vehicle, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is invalid or the insert fails.
    pub fn insert_fleet(&self, fleet: &NewFleet) -> Result<i64, PersistenceError> {
        mutations::insert_fleet(&self.conn, fleet)
    }

    /// Inserts a routine schedule and its stops, returning the schedule
    /// id.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop list is empty, the (fleet, weekday)
    /// pair already exists, or any insert fails.
    pub fn insert_schedule(&mut self, schedule: &NewSchedule) -> Result<i64, PersistenceError> {
        let tx: Transaction<'_> = self.conn.transaction()?;
        let schedule_id: i64 = mutations::insert_schedule(&tx, schedule)?;
        tx.commit()?;

        Ok(schedule_id)
    }

    /// Inserts a pickup request, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_request(&self, request: &NewRequest) -> Result<i64, PersistenceError> {
        mutations::insert_request(&self.conn, request)
    }

    /// Fetches a pickup request by id.
    ///
    /// # Errors
    ///
    /// Returns `RequestNotFound` if no such request exists.
    pub fn request(&self, request_id: i64) -> Result<PickupRequest, PersistenceError> {
        queries::request_by_id(&self.conn, request_id)
    }

    /// Loads the schedule rows for a weekday, joins included.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or decoding fails.
    pub fn schedule_rows(&self, weekday: Weekday) -> Result<Vec<ScheduleRow>, PersistenceError> {
        queries::schedule_rows_for_weekday(&self.conn, weekday)
    }

    /// Fetches an assignment by id.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentNotFound` if no such assignment exists.
    pub fn assignment(&self, assignment_id: i64) -> Result<Assignment, PersistenceError> {
        queries::assignment_by_id(&self.conn, assignment_id)
    }

    /// Fetches the current (active) assignment for a request, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or decoding fails.
    pub fn active_assignment_for_request(
        &self,
        request_id: i64,
    ) -> Result<Option<Assignment>, PersistenceError> {
        queries::active_assignment_for_request(&self.conn, request_id)
    }

    /// Lists the status history for a pickup request, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn history_for_request(
        &self,
        request_id: i64,
    ) -> Result<Vec<StatusHistoryRecord>, PersistenceError> {
        queries::history_for_ref(&self.conn, RefType::Request, request_id)
    }

    /// Automatically assigns a pickup request to the nearest eligible
    /// officer/fleet pair.
    ///
    /// Loads the request and the schedule rows for the target weekday,
    /// asks the engine for a plan, and commits the plan atomically: the
    /// assignment row, the request's move to `dijadwalkan`, and the
    /// history entry land together or not at all. The officer
    /// notification fires after the commit; delivery failure is logged
    /// and never rolls the assignment back.
    ///
    /// # Arguments
    ///
    /// * `request_id` - The request to assign
    /// * `target_date` - The pickup date; defaults to tomorrow
    /// * `clock` - Source of "today" for the default date
    /// * `notifier` - Notification port for the selected officer
    /// * `actor` - The actor recorded on the history entry
    ///
    /// # Returns
    ///
    /// The stored assignment, or `None` when the request has no
    /// coordinates or no candidate is eligible. The request is left
    /// untouched on `None`.
    ///
    /// # Errors
    ///
    /// Returns `Engine(RequestNotAssignable)` if the request's status
    /// does not permit assignment, `StaleRequestStatus` if the status
    /// changed between planning and commit, or an error if any database
    /// operation fails.
    pub fn auto_assign(
        &mut self,
        request_id: i64,
        target_date: Option<NaiveDate>,
        clock: &dyn Clock,
        notifier: &dyn Notifier,
        actor: &Actor,
    ) -> Result<Option<Assignment>, PersistenceError> {
        let request: PickupRequest = queries::request_by_id(&self.conn, request_id)?;
        let target: NaiveDate = target_date.unwrap_or_else(|| default_target_date(clock));
        let rows: Vec<ScheduleRow> =
            queries::schedule_rows_for_weekday(&self.conn, target.weekday())?;

        let Some(plan) = plan_assignment(&request, &rows, target, actor)? else {
            info!(request_id, %target, "No assignment made");
            return Ok(None);
        };

        let tx: Transaction<'_> = self.conn.transaction()?;
        let assignment_id: i64 = mutations::commit_assignment(&tx, &plan)?;
        tx.commit()?;

        info!(
            assignment_id,
            request_id,
            officer_id = plan.officer_id,
            fleet_id = plan.fleet_id,
            distance_km = plan.distance_km,
            "Committed assignment"
        );

        Self::notify_assignment(notifier, &plan, assignment_id);

        queries::assignment_by_id(&self.conn, assignment_id).map(Some)
    }

    /// Fire-and-forget officer notification for a committed plan.
    fn notify_assignment(notifier: &dyn Notifier, plan: &AssignmentPlan, assignment_id: i64) {
        let payload: serde_json::Value = notification_payload(plan, assignment_id);
        if let Err(err) = notifier.notify(
            plan.officer_user_id,
            NotificationKind::AssignmentCreated,
            &payload,
        ) {
            warn!(
                assignment_id,
                officer_user_id = plan.officer_user_id,
                error = %err,
                "Notification delivery failed"
            );
        }
    }

    /// Moves a pickup request to a new status, recording one history
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns an engine error if the transition is not allowed,
    /// `StaleRequestStatus` if the request changed concurrently, or an
    /// error if the database operation fails.
    pub fn transition_request(
        &mut self,
        request_id: i64,
        new_status: RequestStatus,
        note: Option<String>,
        actor: &Actor,
    ) -> Result<(), PersistenceError> {
        let request: PickupRequest = queries::request_by_id(&self.conn, request_id)?;
        request.status.validate_transition(new_status)?;

        let entry: StatusHistoryEntry = StatusHistoryEntry::for_request(
            request_id,
            Some(request.status),
            new_status,
            note,
            actor.clone(),
        );

        let tx: Transaction<'_> = self.conn.transaction()?;
        mutations::update_request_status(&tx, request_id, request.status, new_status)?;
        mutations::insert_history(&tx, &entry)?;
        tx.commit()?;

        info!(
            request_id,
            from = request.status.as_str(),
            to = new_status.as_str(),
            "Transitioned request"
        );

        Ok(())
    }

    /// Completes an active assignment: records the collected total and
    /// the officer's note, and moves the request to `diangkut`.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentNotActive` if the assignment is not active,
    /// an engine error if the request cannot move to `diangkut`, or an
    /// error if the database operation fails.
    pub fn complete_assignment(
        &mut self,
        assignment_id: i64,
        collected_kg: i64,
        note: Option<String>,
        actor: &Actor,
    ) -> Result<(), PersistenceError> {
        let assignment: Assignment = queries::assignment_by_id(&self.conn, assignment_id)?;
        Self::ensure_active(&assignment)?;

        let request: PickupRequest = queries::request_by_id(&self.conn, assignment.request_id)?;
        request
            .status
            .validate_transition(RequestStatus::Collected)?;

        let entry: StatusHistoryEntry = StatusHistoryEntry::for_request(
            request.id,
            Some(request.status),
            RequestStatus::Collected,
            note.clone(),
            actor.clone(),
        );

        let tx: Transaction<'_> = self.conn.transaction()?;
        Self::close_assignment(
            &tx,
            assignment_id,
            AssignmentStatus::Completed,
            Some(collected_kg),
            note,
        )?;
        mutations::update_request_status(&tx, request.id, request.status, RequestStatus::Collected)?;
        mutations::insert_history(&tx, &entry)?;
        tx.commit()?;

        info!(assignment_id, request_id = request.id, collected_kg, "Completed assignment");

        Ok(())
    }

    /// Cancels an active assignment and returns the request to
    /// `diverifikasi` so it can be assigned again.
    ///
    /// The revert is an administrative step outside the forward
    /// transition table; it is guarded on the request still being
    /// `dijadwalkan`.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentNotActive` if the assignment is not active,
    /// `StaleRequestStatus` if the request is no longer scheduled, or
    /// an error if the database operation fails.
    pub fn cancel_assignment(
        &mut self,
        assignment_id: i64,
        note: Option<String>,
        actor: &Actor,
    ) -> Result<(), PersistenceError> {
        let assignment: Assignment = queries::assignment_by_id(&self.conn, assignment_id)?;
        Self::ensure_active(&assignment)?;

        let entry: StatusHistoryEntry = StatusHistoryEntry::for_request(
            assignment.request_id,
            Some(RequestStatus::Scheduled),
            RequestStatus::Verified,
            note.clone(),
            actor.clone(),
        );

        let tx: Transaction<'_> = self.conn.transaction()?;
        Self::close_assignment(&tx, assignment_id, AssignmentStatus::Cancelled, None, note)?;
        mutations::update_request_status(
            &tx,
            assignment.request_id,
            RequestStatus::Scheduled,
            RequestStatus::Verified,
        )?;
        mutations::insert_history(&tx, &entry)?;
        tx.commit()?;

        info!(assignment_id, request_id = assignment.request_id, "Cancelled assignment");

        Ok(())
    }

    fn ensure_active(assignment: &Assignment) -> Result<(), PersistenceError> {
        if assignment.status == AssignmentStatus::Active {
            Ok(())
        } else {
            Err(PersistenceError::AssignmentNotActive {
                assignment_id: assignment.id,
                status: assignment.status.as_str().to_string(),
            })
        }
    }

    /// Closes an active assignment row, guarded on it still being
    /// active.
    fn close_assignment(
        tx: &Transaction<'_>,
        assignment_id: i64,
        new_status: AssignmentStatus,
        collected_kg: Option<i64>,
        note: Option<String>,
    ) -> Result<(), PersistenceError> {
        let updated: usize = tx.execute(
            "UPDATE penugasan
             SET status = ?1, berat_terangkut_kg = ?2, catatan = ?3
             WHERE id = ?4 AND status = 'aktif'",
            params![new_status.as_str(), collected_kg, note, assignment_id],
        )?;

        if updated == 0 {
            return Err(PersistenceError::AssignmentNotActive {
                assignment_id,
                status: new_status.as_str().to_string(),
            });
        }

        Ok(())
    }
}
