// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use angkut::AssignmentPlan;
use angkut_audit::StatusHistoryEntry;
use angkut_domain::{
    Coordinate, RequestStatus, iso_number, validate_capacity, validate_schedule_stops,
};
use rusqlite::{Connection, Transaction, params};
use tracing::debug;

use crate::data_models::{NewFleet, NewOfficer, NewRegion, NewRequest, NewSchedule, NewSubArea};
use crate::error::PersistenceError;

fn latitude_of(coordinate: Option<Coordinate>) -> Option<f64> {
    coordinate.map(|coordinate| coordinate.latitude())
}

fn longitude_of(coordinate: Option<Coordinate>) -> Option<f64> {
    coordinate.map(|coordinate| coordinate.longitude())
}

/// Inserts a service area.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_region(conn: &Connection, region: &NewRegion) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO wilayah (nama, kecamatan, latitude, longitude, is_active)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            region.name,
            region.sub_district,
            latitude_of(region.anchor),
            longitude_of(region.anchor),
            region.is_active,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Inserts a sub-area.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_sub_area(conn: &Connection, sub_area: &NewSubArea) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO kampung (wilayah_id, nama, latitude, longitude, urutan_rute)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            sub_area.region_id,
            sub_area.name,
            latitude_of(sub_area.coordinate),
            longitude_of(sub_area.coordinate),
            sub_area.route_order,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Inserts an officer.
///
/// # Errors
///
/// Returns an error if the insert or days-off serialization fails.
pub fn insert_officer(conn: &Connection, officer: &NewOfficer) -> Result<i64, PersistenceError> {
    let days_off_json: String = serde_json::to_string(&officer.days_off.iso_numbers())?;

    conn.execute(
        "INSERT INTO petugas (user_id, nama, wilayah_id, is_available, hari_libur_json)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            officer.user_id,
            officer.name,
            officer.region_id,
            officer.is_available,
            days_off_json,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Inserts a fleet vehicle.
///
/// # Errors
///
/// Returns an error if the capacity is invalid or the insert fails.
pub fn insert_fleet(conn: &Connection, fleet: &NewFleet) -> Result<i64, PersistenceError> {
    validate_capacity(fleet.capacity_kg)?;

    conn.execute(
        "INSERT INTO armada (nomor_polisi, kapasitas_kg, status, wilayah_id, ketua_petugas_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            fleet.plate_number,
            fleet.capacity_kg,
            fleet.status.as_str(),
            fleet.region_id,
            fleet.leader_officer_id,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Inserts a routine schedule and its ordered stops in one transaction.
///
/// # Errors
///
/// Returns an error if the stop list is empty or any insert fails
/// (including the unique (fleet, weekday) constraint).
pub fn insert_schedule(
    tx: &Transaction<'_>,
    schedule: &NewSchedule,
) -> Result<i64, PersistenceError> {
    validate_schedule_stops(&schedule.stops)?;

    tx.execute(
        "INSERT INTO jadwal_rutin (armada_id, hari) VALUES (?1, ?2)",
        params![schedule.fleet_id, i64::from(iso_number(schedule.weekday))],
    )?;
    let schedule_id: i64 = tx.last_insert_rowid();

    for stop in &schedule.stops {
        tx.execute(
            "INSERT INTO jadwal_rutin_kampung (jadwal_id, kampung_id, urutan)
             VALUES (?1, ?2, ?3)",
            params![schedule_id, stop.sub_area_id, stop.route_order],
        )?;
    }

    Ok(schedule_id)
}

/// Inserts a pickup request.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_request(conn: &Connection, request: &NewRequest) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO pengajuan (
            user_id, nama_tamu, telepon_tamu, email_tamu,
            wilayah_id, kampung_id, alamat, latitude, longitude,
            estimasi_berat_kg, foto_path, status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            request.user_id,
            request.guest_name,
            request.guest_phone,
            request.guest_email,
            request.region_id,
            request.sub_area_id,
            request.address,
            latitude_of(request.location),
            longitude_of(request.location),
            request.estimated_volume_kg,
            request.photo_path,
            request.status.as_str(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Appends a status-history entry.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_history(
    conn: &Connection,
    entry: &StatusHistoryEntry,
) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO riwayat_status (
            ref_type, ref_id, status_sebelumnya, status_baru,
            catatan, actor_user_id, actor_type
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            entry.ref_type.as_str(),
            entry.ref_id,
            entry.previous_status,
            entry.new_status,
            entry.note,
            entry.actor.user_id,
            entry.actor.actor_type,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Moves a request to a new status, guarded by its expected current
/// status. The guard re-validates the precondition at write time, so a
/// request that changed under us fails the commit instead of being
/// silently overwritten.
///
/// # Errors
///
/// Returns `StaleRequestStatus` if the request is no longer in
/// `expected` status, or an error if the update fails.
pub fn update_request_status(
    conn: &Connection,
    request_id: i64,
    expected: RequestStatus,
    new_status: RequestStatus,
) -> Result<(), PersistenceError> {
    let updated: usize = conn.execute(
        "UPDATE pengajuan SET status = ?1 WHERE id = ?2 AND status = ?3",
        params![new_status.as_str(), request_id, expected.as_str()],
    )?;

    if updated == 0 {
        return Err(PersistenceError::StaleRequestStatus {
            request_id,
            expected: expected.as_str().to_string(),
        });
    }

    Ok(())
}

/// Commits an assignment plan: inserts the assignment row, moves the
/// request to its new status, and appends the history entry. All three
/// writes share the caller's transaction and commit or roll back
/// together.
///
/// # Arguments
///
/// * `tx` - The active database transaction
/// * `plan` - The plan produced by the assignment engine
///
/// # Returns
///
/// The id assigned to the new assignment row.
///
/// # Errors
///
/// Returns `StaleRequestStatus` if the request's status changed since
/// planning, or an error if any insert fails.
pub fn commit_assignment(
    tx: &Transaction<'_>,
    plan: &AssignmentPlan,
) -> Result<i64, PersistenceError> {
    tx.execute(
        "INSERT INTO penugasan (pengajuan_id, petugas_id, armada_id, jadwal_angkut, status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            plan.request_id,
            plan.officer_id,
            plan.fleet_id,
            plan.scheduled_at.to_string(),
            plan.assignment_status.as_str(),
        ],
    )?;
    let assignment_id: i64 = tx.last_insert_rowid();
    debug!(assignment_id, request_id = plan.request_id, "Inserted assignment");

    update_request_status(tx, plan.request_id, plan.previous_status, plan.new_status)?;
    debug!(
        request_id = plan.request_id,
        status = plan.new_status.as_str(),
        "Updated request status"
    );

    let history_id: i64 = insert_history(tx, &plan.history)?;
    debug!(history_id, "Appended status history entry");

    Ok(assignment_id)
}
